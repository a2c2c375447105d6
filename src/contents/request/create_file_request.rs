use super::{
    content::{Encoding, FileContent},
    CommitRequest,
};
use crate::contents::Error;
use serde::Serialize;
use std::{fmt, ops::Deref};

/// Creates a file, or overwrites one when no prior version has to be pinned.
///
/// Empty content is valid: a file may be legitimately empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFileRequest {
    #[serde(flatten)]
    pub(super) commit: CommitRequest,
    content: FileContent,
}

impl CreateFileRequest {
    pub fn new(message: impl Into<String>, content: impl Into<String>) -> Result<Self, Error> {
        let commit = CommitRequest::new(message)?;

        Ok(Self::from_commit(commit, content))
    }

    pub fn from_commit(commit: CommitRequest, content: impl Into<String>) -> Self {
        Self {
            commit,
            content: FileContent::new(content),
        }
    }

    /// Marks the content as already base64-encoded.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.content.encoding = encoding;
        self
    }

    pub fn content(&self) -> &str {
        &self.content.text
    }

    pub fn encoding(&self) -> Encoding {
        self.content.encoding
    }

    pub fn commit(&self) -> &CommitRequest {
        &self.commit
    }
}

impl_commit_options!(CreateFileRequest, commit);

impl Deref for CreateFileRequest {
    type Target = CommitRequest;

    fn deref(&self) -> &Self::Target {
        &self.commit
    }
}

impl fmt::Display for CreateFileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message: {} Content: {}", self.message(), self.content())
    }
}
