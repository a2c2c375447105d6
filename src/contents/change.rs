use super::request::{
    CommitRequest, CreateFileRequest, DeleteFileRequest, SerializeRequest, UpdateFileRequest,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content-modifying commit: a new file, a replacement of a pinned version, or a deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentChange {
    Create(CreateFileRequest),
    Update(UpdateFileRequest),
    Delete(DeleteFileRequest),
}

impl ContentChange {
    pub fn commit(&self) -> &CommitRequest {
        match self {
            ContentChange::Create(request) => request.commit(),
            ContentChange::Update(request) => request.commit(),
            ContentChange::Delete(request) => request.commit(),
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            ContentChange::Create(request) => Some(request.content()),
            ContentChange::Update(request) => Some(request.content()),
            ContentChange::Delete(_) => None,
        }
    }

    /// Blob SHA the change is conditioned on, if any.
    pub fn sha(&self) -> Option<&str> {
        match self {
            ContentChange::Create(_) => None,
            ContentChange::Update(request) => Some(request.sha()),
            ContentChange::Delete(request) => Some(request.sha()),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            ContentChange::Create(_) | ContentChange::Update(_) => Method::Put,
            ContentChange::Delete(_) => Method::Delete,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentChange::Create(_) => "create",
            ContentChange::Update(_) => "update",
            ContentChange::Delete(_) => "delete",
        }
    }
}

impl SerializeRequest for ContentChange {}

impl fmt::Display for ContentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentChange::Create(request) => fmt::Display::fmt(request, f),
            ContentChange::Update(request) => fmt::Display::fmt(request, f),
            ContentChange::Delete(request) => fmt::Display::fmt(request, f),
        }
    }
}

impl From<CreateFileRequest> for ContentChange {
    fn from(request: CreateFileRequest) -> Self {
        ContentChange::Create(request)
    }
}

impl From<UpdateFileRequest> for ContentChange {
    fn from(request: UpdateFileRequest) -> Self {
        ContentChange::Update(request)
    }
}

impl From<DeleteFileRequest> for ContentChange {
    fn from(request: DeleteFileRequest) -> Self {
        ContentChange::Delete(request)
    }
}
