mod error;

pub use error::TransportError;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode, Url};
use tracing::trace;

const LOG_TARGET: &str = "outband::transport";

/// A single POST to be performed by a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Status and raw body returned by the remote end.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Bytes,
}

impl FetchResponse {
    /// Builds a response, deriving the status text from the canonical reason phrase.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self { status, status_text, body: body.into() }
    }

    /// `"<status> <status text>"`, e.g. `502 Bad Gateway`.
    pub fn status_line(&self) -> String {
        if self.status_text.is_empty() {
            return self.status.to_string();
        }
        format!("{} {}", self.status, self.status_text)
    }
}

/// The network capability used to submit reports. Implemented by [`HttpFetcher`] and by
/// test doubles.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn post(&self, request: FetchRequest) -> Result<FetchResponse, TransportError>;
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    async fn post(&self, request: FetchRequest) -> Result<FetchResponse, TransportError> {
        (**self).post(request).await
    }
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn post(&self, request: FetchRequest) -> Result<FetchResponse, TransportError> {
        (**self).post(request).await
    }
}

/// A [`Fetcher`] implementation that uses HTTP connections.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    headers: Vec<(String, String)>,
}

impl HttpFetcher {
    /// Constructs [`HttpFetcher`] using default HTTP client settings.
    ///
    /// To use custom HTTP settings (e.g. proxy, timeout), use
    /// [`new_with_client`](Self::new_with_client) instead.
    pub fn new() -> Self {
        Self::new_with_client(Client::new())
    }

    /// Constructs [`HttpFetcher`] from a custom `reqwest` client.
    pub fn new_with_client(client: Client) -> Self {
        Self { client, headers: vec![] }
    }

    /// Constructs [`HttpFetcher`] whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new_with_client(client))
    }

    /// Consumes the current [`HttpFetcher`] instance and returns a new one with the header
    /// appended. Same as calling [`add_header`](Self::add_header).
    pub fn with_header(mut self, name: String, value: String) -> Self {
        self.add_header(name, value);
        self
    }

    /// Adds a custom HTTP header to be sent with every request, in addition to the ones
    /// carried by the [`FetchRequest`].
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers.push((name, value))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn post(&self, request: FetchRequest) -> Result<FetchResponse, TransportError> {
        trace!(target: LOG_TARGET, url = %request.url, body = %request.body, "Sending request.");

        let mut request_builder = self.client.post(request.url).body(request.body);

        for (name, value) in self.headers.iter().chain(request.headers.iter()) {
            request_builder = request_builder.header(name, value);
        }

        let response = request_builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        trace!(target: LOG_TARGET, status = status.as_u16(), "Received response.");

        Ok(FetchResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
