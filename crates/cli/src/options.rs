use std::time::Duration;

use outband_reporter::constants::{DEFAULT_CLIENT_NAME, DEFAULT_CLIENT_VERSION, ENDPOINT_ENV_VAR};
use outband_reporter::{ConfigError, ReporterConfig};
use merge_options::MergeOptions;
use outband_transport::{HttpFetcher, TransportError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, clap::Args, Clone, Serialize, Deserialize, PartialEq, MergeOptions)]
#[serde(default)]
#[command(next_help_heading = "Reporter options")]
pub struct ReporterOptions {
    /// Monitoring endpoint receiving out-of-band failure reports
    #[arg(
        long = "reporter.endpoint",
        value_name = "URL",
        env = ENDPOINT_ENV_VAR,
        help = "Monitoring endpoint receiving out-of-band failure reports. Reporting is \
                disabled when unset or empty."
    )]
    pub endpoint: Option<String>,

    /// Client name sent with every report.
    #[arg(long = "reporter.client_name", value_name = "NAME")]
    #[arg(default_value = DEFAULT_CLIENT_NAME)]
    pub client_name: String,

    /// Client version sent with every report.
    #[arg(long = "reporter.client_version", value_name = "VERSION")]
    #[arg(default_value = DEFAULT_CLIENT_VERSION)]
    pub client_version: String,
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            endpoint: None,
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
        }
    }
}

impl ReporterOptions {
    pub fn to_config(&self) -> Result<ReporterConfig, ConfigError> {
        Ok(ReporterConfig::from_endpoint_str(self.endpoint.as_deref())?
            .with_client(&self.client_name, &self.client_version))
    }
}

#[derive(Debug, clap::Args, Clone, Serialize, Deserialize, PartialEq, MergeOptions)]
#[serde(default)]
#[command(next_help_heading = "HTTP options")]
pub struct HttpOptions {
    /// Timeout in seconds for a report submission
    #[arg(long = "http.timeout", value_name = "SECONDS", default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self { timeout: DEFAULT_HTTP_TIMEOUT_SECS }
    }
}

impl HttpOptions {
    pub fn fetcher(&self) -> Result<HttpFetcher, TransportError> {
        HttpFetcher::with_timeout(Duration::from_secs(self.timeout))
    }
}
