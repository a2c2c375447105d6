/// Generates the consuming `with_*` setters for the optional commit fields.
/// The trailing idents are the field path from the request down to its `CommitRequest`.
macro_rules! impl_commit_options {
    ($ty:ty $(, $envelope:ident)*) => {
        impl $ty {
            /// Commits to `branch` instead of the repository default branch.
            pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
                self$(.$envelope)*.branch = Some(branch.into());
                self
            }

            pub fn with_committer(mut self, committer: $crate::contents::request::Signature) -> Self {
                self$(.$envelope)*.committer = Some(committer);
                self
            }

            pub fn with_author(mut self, author: $crate::contents::request::Signature) -> Self {
                self$(.$envelope)*.author = Some(author);
                self
            }
        }
    };
}

mod commit_request;
mod content;
mod create_file_request;
mod delete_file_request;
mod signature;
mod update_file_request;

pub use commit_request::CommitRequest;
pub use content::Encoding;
pub use create_file_request::CreateFileRequest;
pub use delete_file_request::DeleteFileRequest;
pub use signature::Signature;
pub use update_file_request::UpdateFileRequest;

use anyhow::Result;
use serde::Serialize;

pub trait SerializeRequest: Serialize {
    fn into_request(&self) -> Result<String> {
        let body = serde_json::to_string(self)?;

        log::debug!("serialized request body ({} bytes)", body.len());

        Ok(body)
    }
}

impl SerializeRequest for CreateFileRequest {}
impl SerializeRequest for UpdateFileRequest {}
impl SerializeRequest for DeleteFileRequest {}
