use outband_transport::{FetchRequest, Fetcher};
use outband_types::FailureReport;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::constants::{CLIENT_NAME_HEADER, CLIENT_VERSION_HEADER, LOG_TARGET, REPORT_ERROR_MUTATION};
use crate::error::TransmissionError;
use crate::ReporterConfig;

#[derive(Debug, Serialize)]
struct ReportErrorRequest<'a> {
    query: &'static str,
    variables: ReportErrorVariables<'a>,
}

#[derive(Debug, Serialize)]
struct ReportErrorVariables<'a> {
    input: &'a FailureReport,
}

/// Serializes the `reportError` mutation carrying `report`.
pub fn encode_submission(report: &FailureReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ReportErrorRequest {
        query: REPORT_ERROR_MUTATION,
        variables: ReportErrorVariables { input: report },
    })
}

/// Identification headers sent with every submission.
pub fn submission_headers(config: &ReporterConfig) -> Vec<(String, String)> {
    vec![
        ("content-type".to_string(), "application/json".to_string()),
        (CLIENT_NAME_HEADER.to_string(), config.client_name.clone()),
        (CLIENT_VERSION_HEADER.to_string(), config.client_version.clone()),
        ("user-agent".to_string(), format!("{}/{}", config.client_name, config.client_version)),
    ]
}

/// Posts `report` to `endpoint` once and checks the acknowledgement.
pub async fn transmit<F: Fetcher + ?Sized>(
    report: &FailureReport,
    endpoint: &Url,
    config: &ReporterConfig,
    fetcher: &F,
) -> Result<(), TransmissionError> {
    let request = FetchRequest {
        url: endpoint.clone(),
        headers: submission_headers(config),
        body: encode_submission(report)?,
    };

    let response = fetcher.post(request).await?;
    let status_line = response.status_line();

    let ack: Value = serde_json::from_slice(&response.body).map_err(|source| {
        TransmissionError::MalformedAcknowledgement { status_line: status_line.clone(), source }
    })?;

    if !is_acknowledged(&ack) {
        debug!(target: LOG_TARGET, status = %status_line, ack = %ack, "Report rejected.");
        return Err(TransmissionError::NotAcknowledged { status_line });
    }

    Ok(())
}

/// `data.reportError` must be present and truthy.
fn is_acknowledged(ack: &Value) -> bool {
    ack.pointer("/data/reportError").is_some_and(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
