use super::{CommitRequest, CreateFileRequest, Encoding};
use crate::contents::{ensure_not_blank, Error};
use serde::Serialize;
use std::{fmt, ops::Deref};

/// Replaces the file version identified by `sha` with new content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateFileRequest {
    #[serde(flatten)]
    file: CreateFileRequest,
    sha: String,
}

impl UpdateFileRequest {
    pub fn new(
        message: impl Into<String>,
        content: impl Into<String>,
        sha: impl Into<String>,
    ) -> Result<Self, Error> {
        let file = CreateFileRequest::new(message, content)?;

        Self::from_file(file, sha)
    }

    /// Pins an existing create request to the blob it replaces.
    pub fn from_file(file: CreateFileRequest, sha: impl Into<String>) -> Result<Self, Error> {
        let sha = ensure_not_blank(sha.into(), "sha")?;

        Ok(Self { file, sha })
    }

    pub fn from_commit(
        commit: CommitRequest,
        content: impl Into<String>,
        sha: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::from_file(CreateFileRequest::from_commit(commit, content), sha)
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.file = self.file.with_encoding(encoding);
        self
    }
}

impl_commit_options!(UpdateFileRequest, file, commit);

impl Deref for UpdateFileRequest {
    type Target = CreateFileRequest;

    fn deref(&self) -> &Self::Target {
        &self.file
    }
}

// content is left out: it is usually large
impl fmt::Display for UpdateFileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA: {} Message: {}", self.sha, self.message())
    }
}
