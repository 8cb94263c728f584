/// Errors raised by a [`Fetcher`](crate::Fetcher) when a submission could not complete.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP-related errors.
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    /// Errors from fetchers not backed by `reqwest`.
    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        TransportError::Other(error.into())
    }
}
