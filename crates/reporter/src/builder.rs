use chrono::{DateTime, Utc};
use outband_types::{
    BodyError, Failure, FailureReport, ObservedResponse, OriginalRequest, ReportedError,
    ReportedRequest, ReportedResponse,
};

use crate::classifier::classify;

/// Everything the caller knows about one failed downstream call.
#[derive(Debug, Clone)]
pub struct FailedCall {
    pub failure: Failure,
    pub request: OriginalRequest,
    pub response: ObservedResponse,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub tags: Option<Vec<String>>,
}

impl FailedCall {
    pub fn new(
        failure: impl Into<Failure>,
        request: OriginalRequest,
        response: ObservedResponse,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        Self { failure: failure.into(), request, response, started_at, ended_at, tags: None }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Classifies the call and reads the request and response bodies into a [`FailureReport`].
///
/// Fails only if one of the bodies cannot be read as text.
pub async fn build_report(call: &FailedCall) -> Result<FailureReport, BodyError> {
    let code = classify(&call.response);

    let response = match &call.response {
        ObservedResponse::NoResponse => None,
        ObservedResponse::Http { status, body } => {
            Some(ReportedResponse { http_status_code: *status, body: body.text().await? })
        }
    };
    let request_body = call.request.body.text().await?;

    Ok(FailureReport {
        error: ReportedError { code, message: call.failure.message().to_string() },
        request: ReportedRequest { url: call.request.url.clone(), body: request_body },
        response,
        started_at: call.started_at,
        ended_at: call.ended_at,
        tags: call.tags.clone(),
    })
}
