use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::BodyError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A body whose text is only available through an asynchronous read, e.g. a payload
/// still owned by an HTTP client. Reading takes `&self` and must not consume the source.
#[async_trait]
pub trait ReadBody: fmt::Debug + Send + Sync {
    async fn read_text(&self) -> Result<String, BoxError>;
}

/// Payload of an outbound request or of a downstream response.
#[derive(Debug, Clone)]
pub enum Body {
    Text(String),
    /// Raw bytes, expected to hold UTF-8 text.
    Bytes(Bytes),
    Deferred(Arc<dyn ReadBody>),
}

impl Body {
    pub fn empty() -> Self {
        Body::Text(String::new())
    }

    pub fn deferred(source: impl ReadBody + 'static) -> Self {
        Body::Deferred(Arc::new(source))
    }

    /// Reads the full body as text without consuming it.
    pub async fn text(&self) -> Result<String, BodyError> {
        match self {
            Body::Text(text) => Ok(text.clone()),
            Body::Bytes(bytes) => Ok(String::from_utf8(bytes.to_vec())?),
            Body::Deferred(source) => source.read_text().await.map_err(BodyError::Read),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Body::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(bytes))
    }
}
