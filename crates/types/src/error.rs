use crate::body::BoxError;

/// Errors raised while reading a request or response body as text.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("failed to read body: {0}")]
    Read(#[source] BoxError),
}
