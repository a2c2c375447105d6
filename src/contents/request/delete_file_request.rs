use super::CommitRequest;
use crate::contents::{ensure_not_blank, Error};
use serde::Serialize;
use std::{fmt, ops::Deref};

/// Deletes the file version identified by `sha`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteFileRequest {
    #[serde(flatten)]
    commit: CommitRequest,
    sha: String,
}

impl DeleteFileRequest {
    pub fn new(message: impl Into<String>, sha: impl Into<String>) -> Result<Self, Error> {
        let commit = CommitRequest::new(message)?;

        Self::from_commit(commit, sha)
    }

    pub fn from_commit(commit: CommitRequest, sha: impl Into<String>) -> Result<Self, Error> {
        let sha = ensure_not_blank(sha.into(), "sha")?;

        Ok(Self { commit, sha })
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn commit(&self) -> &CommitRequest {
        &self.commit
    }
}

impl_commit_options!(DeleteFileRequest, commit);

impl Deref for DeleteFileRequest {
    type Target = CommitRequest;

    fn deref(&self) -> &Self::Target {
        &self.commit
    }
}

impl fmt::Display for DeleteFileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA: {} Message: {}", self.sha, self.message())
    }
}
