use crate::body::Body;

/// The outbound request whose failure is being reported.
#[derive(Debug, Clone)]
pub struct OriginalRequest {
    pub url: String,
    pub body: Body,
}

impl OriginalRequest {
    pub fn new(url: impl Into<String>, body: impl Into<Body>) -> Self {
        Self { url: url.into(), body: body.into() }
    }
}

/// What came back from the downstream service, if anything.
#[derive(Debug, Clone)]
pub enum ObservedResponse {
    /// The call never produced a response (connection refused, DNS failure, ...).
    NoResponse,
    Http { status: u16, body: Body },
}

impl ObservedResponse {
    pub fn http(status: u16, body: impl Into<Body>) -> Self {
        ObservedResponse::Http { status, body: body.into() }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ObservedResponse::NoResponse => None,
            ObservedResponse::Http { status, .. } => Some(*status),
        }
    }
}
