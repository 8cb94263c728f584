
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use outband_transport::{FetchRequest, FetchResponse, Fetcher, TransportError};
use outband_types::{ObservedResponse, OriginalRequest};
use serde_json::Value;
use url::Url;

use crate::{FailedCall, OutOfBandReporter, ReporterConfig};

pub(crate) const ENDPOINT: &str = "https://monitoring.example.com/api/graphql";

/// Answers every submission with the same status and body and remembers what it was sent.
#[derive(Debug)]
pub(crate) struct RecordingFetcher {
    status: u16,
    body: String,
    requests: Mutex<Vec<FetchRequest>>,
}

impl RecordingFetcher {
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into(), requests: Mutex::new(vec![]) }
    }

    pub(crate) fn acknowledging() -> Self {
        Self::new(200, r#"{"data":{"reportError":true}}"#)
    }

    pub(crate) fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The `variables.input` object of every recorded submission.
    pub(crate) fn inputs(&self) -> Vec<Value> {
        self.requests()
            .iter()
            .map(|r| serde_json::from_str::<Value>(&r.body).unwrap()["variables"]["input"].clone())
            .collect()
    }
}

#[async_trait]
impl Fetcher for RecordingFetcher {
    async fn post(&self, request: FetchRequest) -> Result<FetchResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(FetchResponse::new(self.status, self.body.clone()))
    }
}

/// Fails every submission before any response is received.
#[derive(Debug)]
pub(crate) struct UnreachableFetcher;

#[async_trait]
impl Fetcher for UnreachableFetcher {
    async fn post(&self, _request: FetchRequest) -> Result<FetchResponse, TransportError> {
        Err(TransportError::other("connection refused (os error 111)"))
    }
}

pub(crate) fn enabled_reporter() -> OutOfBandReporter {
    OutOfBandReporter::new(ReporterConfig::new(Some(Url::parse(ENDPOINT).unwrap())))
}

pub(crate) fn timestamp(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, second).unwrap()
}

pub(crate) fn failed_call(response: ObservedResponse) -> FailedCall {
    FailedCall::new(
        "boom",
        OriginalRequest::new("https://products.internal/graphql", "{q:1}"),
        response,
        timestamp(0),
        timestamp(1),
    )
}
