use outband_transport::TransportError;
use outband_types::BodyError;

use crate::ReportStage;

/// The only error this crate ever hands back to callers of
/// [`OutOfBandReporter::submit_report`](crate::OutOfBandReporter::submit_report). It describes
/// the reporting process itself, never the failure being reported.
#[derive(Debug, thiserror::Error)]
pub enum ReportingError {
    #[error("failed to build out-of-band report: {0}")]
    Build(#[from] BodyError),
    #[error("out-of-band error reporting failed: {0}")]
    Transmission(#[from] TransmissionError),
}

impl ReportingError {
    /// The stage the report was in when it failed.
    pub fn stage(&self) -> ReportStage {
        match self {
            ReportingError::Build(_) => ReportStage::Building,
            ReportingError::Transmission(_) => ReportStage::Transmitting,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransmissionError {
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{status_line}: acknowledgement is not valid JSON: {source}")]
    MalformedAcknowledgement {
        status_line: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{status_line}: report was not acknowledged")]
    NotAcknowledged { status_line: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid reporting endpoint {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
