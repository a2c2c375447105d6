use super::Signature;
use crate::contents::{ensure_not_blank, Error};
use serde::Serialize;

/// Fields shared by every request that produces a commit.
///
/// `branch`, `committer` and `author` are optional; when absent the API falls back to the
/// repository default branch and the authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRequest {
    pub(super) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) committer: Option<Signature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) author: Option<Signature>,
}

impl CommitRequest {
    pub fn new(message: impl Into<String>) -> Result<Self, Error> {
        let message = ensure_not_blank(message.into(), "message")?;

        Ok(Self {
            message,
            branch: None,
            committer: None,
            author: None,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn committer(&self) -> Option<&Signature> {
        self.committer.as_ref()
    }

    pub fn author(&self) -> Option<&Signature> {
        self.author.as_ref()
    }
}

impl_commit_options!(CommitRequest);
