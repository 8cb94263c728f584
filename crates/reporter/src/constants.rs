pub(crate) const LOG_TARGET: &str = "outband::reporter";

/// Environment variable holding the reporting endpoint. Unset or empty disables reporting.
pub const ENDPOINT_ENV_VAR: &str = "OUTBAND_REPORTER_ENDPOINT";

pub const DEFAULT_CLIENT_NAME: &str = "outband-reporter";
pub const DEFAULT_CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CLIENT_NAME_HEADER: &str = "x-outband-client-name";
pub const CLIENT_VERSION_HEADER: &str = "x-outband-client-version";

pub const REPORT_ERROR_MUTATION: &str =
    "mutation ReportError($input: APIMonitoringReport) { reportError(report: $input) }";
