pub mod change;
pub mod request;
pub mod route;

pub use change::{ContentChange, Method};
pub use route::ContentsRoute;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("argument `{name}` must not be empty")]
    InvalidArgument { name: &'static str },
}

/// Rejects empty and whitespace-only values. The value itself is returned untouched.
pub(crate) fn ensure_not_blank(value: String, name: &'static str) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument { name });
    }

    Ok(value)
}
