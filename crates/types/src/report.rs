use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter};

/// Canonical classification of a failed downstream call.
#[derive(
    Debug, AsRefStr, EnumIter, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ConnectionFailed,
    InvalidBody,
    Timeout,
    Other,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedError {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedRequest {
    pub url: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedResponse {
    pub http_status_code: u16,
    pub body: String,
}

/// A single out-of-band failure report, shaped exactly like the monitoring endpoint's
/// `APIMonitoringReport` input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    pub error: ReportedError,
    pub request: ReportedRequest,
    /// `null` on the wire when the call never produced a response.
    pub response: Option<ReportedResponse>,
    #[serde(with = "iso8601")]
    pub started_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub ended_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl FailureReport {
    pub fn error_code(&self) -> ErrorCode {
        self.error.code
    }

    pub fn error_message(&self) -> &str {
        &self.error.message
    }

    pub fn request_url(&self) -> &str {
        &self.request.url
    }

    pub fn request_body(&self) -> &str {
        &self.request.body
    }

    pub fn response_status_code(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.http_status_code)
    }

    pub fn response_body(&self) -> Option<&str> {
        self.response.as_ref().map(|r| r.body.as_str())
    }
}

/// RFC 3339 timestamps in UTC with millisecond precision, e.g. `2024-03-20T12:00:00.000Z`.
mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;

    fn report(response: Option<ReportedResponse>, tags: Option<Vec<String>>) -> FailureReport {
        FailureReport {
            error: ReportedError { code: ErrorCode::Timeout, message: "deadline".to_string() },
            request: ReportedRequest {
                url: "https://example.com/graphql".to_string(),
                body: "{q:1}".to_string(),
            },
            response,
            started_at: Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap(),
            ended_at: Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 30).unwrap(),
            tags,
        }
    }

    #[test]
    fn test_error_code_labels() {
        let labels: Vec<String> = ErrorCode::iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["CONNECTION_FAILED", "INVALID_BODY", "TIMEOUT", "OTHER"]);

        for code in ErrorCode::iter() {
            assert_eq!(serde_json::to_value(code).unwrap(), json!(code.as_ref()));
        }
    }

    #[test]
    fn test_wire_shape_with_response() {
        let report = report(
            Some(ReportedResponse { http_status_code: 504, body: "late".to_string() }),
            Some(vec!["b".to_string(), "a".to_string()]),
        );

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "error": { "code": "TIMEOUT", "message": "deadline" },
                "request": { "url": "https://example.com/graphql", "body": "{q:1}" },
                "response": { "httpStatusCode": 504, "body": "late" },
                "startedAt": "2024-03-20T12:00:00.000Z",
                "endedAt": "2024-03-20T12:00:30.000Z",
                "tags": ["b", "a"],
            })
        );
        assert_eq!(report.response_status_code(), Some(504));
        assert_eq!(report.response_body(), Some("late"));
    }

    #[test]
    fn test_wire_shape_without_response() {
        let value = serde_json::to_value(report(None, None)).unwrap();
        assert_eq!(value["response"], serde_json::Value::Null);
        assert!(value.get("tags").is_none());

        let value = serde_json::to_value(report(None, Some(vec![]))).unwrap();
        assert_eq!(value["tags"], json!([]));
    }

    #[test]
    fn test_deserialize_back() {
        let original = report(None, Some(vec!["x".to_string()]));
        let text = serde_json::to_string(&original).unwrap();
        let parsed: FailureReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }
}
