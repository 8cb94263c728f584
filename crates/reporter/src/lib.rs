//! Out-of-band failure reporting.
//!
//! When a downstream call fails, [`OutOfBandReporter::submit_report`] classifies the failure,
//! captures the request and response bodies, and posts a `reportError` mutation to the
//! configured monitoring endpoint. Reporting never touches the caller's own error: the only
//! error it returns is a [`ReportingError`] about the reporting process itself.

pub mod builder;
pub mod classifier;
pub mod constants;
pub mod error;
pub mod transmitter;

#[cfg(test)]
mod tests;

pub use builder::{build_report, FailedCall};
pub use classifier::{classify, classify_status};
pub use error::{ConfigError, ReportingError, TransmissionError};

use outband_transport::Fetcher;
use strum_macros::IntoStaticStr;
use tracing::{debug, trace};
use url::Url;

use crate::constants::{DEFAULT_CLIENT_NAME, DEFAULT_CLIENT_VERSION, ENDPOINT_ENV_VAR, LOG_TARGET};

/// Progress of a single report. `Failed` is terminal and surfaces exactly once as a
/// [`ReportingError`].
#[derive(Debug, IntoStaticStr, PartialEq, Eq, Clone, Copy)]
#[strum(serialize_all = "snake_case")]
pub enum ReportStage {
    Classifying,
    Building,
    Transmitting,
    Succeeded,
    Failed,
}

impl ReportStage {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Where reports are posted. `None` turns every submission into a no-op.
    pub endpoint: Option<Url>,
    pub client_name: String,
    pub client_version: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
        }
    }
}

impl ReporterConfig {
    pub fn new(endpoint: Option<Url>) -> Self {
        Self { endpoint, ..Default::default() }
    }

    /// Parses an optional endpoint string. Missing or blank values disable reporting.
    pub fn from_endpoint_str(endpoint: Option<&str>) -> Result<Self, ConfigError> {
        let endpoint = match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(value) => Some(Url::parse(value).map_err(|source| {
                ConfigError::InvalidEndpoint { value: value.to_string(), source }
            })?),
            None => None,
        };
        Ok(Self::new(endpoint))
    }

    /// Reads the endpoint from `OUTBAND_REPORTER_ENDPOINT`.
    ///
    /// ```
    /// use outband_reporter::{OutOfBandReporter, ReporterConfig};
    ///
    /// let reporter = OutOfBandReporter::new(ReporterConfig::from_env()?);
    /// if !reporter.is_enabled() {
    ///     println!("out-of-band reporting is off");
    /// }
    /// # Ok::<(), outband_reporter::ConfigError>(())
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = std::env::var(ENDPOINT_ENV_VAR).ok();
        Self::from_endpoint_str(endpoint.as_deref())
    }

    pub fn with_client(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.client_name = name.into();
        self.client_version = version.into();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }
}

/// Submits failure reports to a monitoring endpoint. Holds no mutable state, so a single
/// instance can serve any number of concurrent submissions.
#[derive(Debug, Clone, Default)]
pub struct OutOfBandReporter {
    config: ReporterConfig,
}

impl OutOfBandReporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Builds a report for `call` and posts it through `fetcher`.
    ///
    /// Returns `Ok(())` without calling `fetcher` when no endpoint is configured.
    pub async fn submit_report<F: Fetcher + ?Sized>(
        &self,
        call: &FailedCall,
        fetcher: &F,
    ) -> Result<(), ReportingError> {
        let Some(endpoint) = &self.config.endpoint else {
            trace!(target: LOG_TARGET, "Reporting disabled, skipping report.");
            return Ok(());
        };

        let result = self.report(call, endpoint, fetcher).await;
        let stage = match &result {
            Ok(()) => ReportStage::Succeeded,
            Err(_) => ReportStage::Failed,
        };
        debug!(
            target: LOG_TARGET,
            stage = stage.as_str(),
            failed_during = result.as_ref().err().map(|e| e.stage().as_str()),
            "Report finished."
        );
        result
    }

    async fn report<F: Fetcher + ?Sized>(
        &self,
        call: &FailedCall,
        endpoint: &Url,
        fetcher: &F,
    ) -> Result<(), ReportingError> {
        trace!(
            target: LOG_TARGET,
            stage = ReportStage::Classifying.as_str(),
            code = %classify(&call.response),
            status = ?call.response.status(),
            url = %call.request.url,
            "Building report."
        );
        let report = build_report(call).await?;

        debug!(
            target: LOG_TARGET,
            stage = ReportStage::Transmitting.as_str(),
            endpoint = %endpoint,
            code = %report.error_code(),
            "Submitting report."
        );
        transmitter::transmit(&report, endpoint, &self.config, fetcher).await?;
        Ok(())
    }
}
