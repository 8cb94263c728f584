//! Outband binary executable.
//!
//! `outband report` submits a single out-of-band failure report, the same way a request router
//! does after a downstream call fails. It is mostly useful to check that a monitoring endpoint
//! accepts reports.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Command, ReportArgs};
use outband_reporter::{classify, OutOfBandReporter};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

mod cli;

const LOG_TARGET: &str = "outband::cli";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set the global tracing subscriber
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("outband=info"));

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(filter_layer)
        .init();

    match Cli::parse().command {
        Command::Report(report) => run_report(report).await,
    }
}

async fn run_report(report: ReportArgs) -> anyhow::Result<()> {
    let started_at = Utc::now();

    let args = report.args.clone().with_config_file()?;
    let config = args.reporter.to_config().context("Invalid reporter options")?;
    let fetcher = args.http.fetcher().context("Failed to create HTTP client")?;
    let reporter = OutOfBandReporter::new(config);

    if !reporter.is_enabled() {
        info!(target: LOG_TARGET, "Reporting endpoint not configured, report will be skipped.");
    }

    let call = report.failed_call(started_at, Utc::now());

    // Reporting errors never replace the failure being reported; they are only logged.
    match reporter.submit_report(&call, &fetcher).await {
        Ok(()) if reporter.is_enabled() => {
            info!(
                target: LOG_TARGET,
                code = %classify(&call.response),
                url = %call.request.url,
                "Report submitted."
            );
        }
        Ok(()) => {}
        Err(e) => {
            warn!(
                target: LOG_TARGET,
                error = %e,
                stage = e.stage().as_str(),
                "Failed to submit out-of-band report."
            );
        }
    }

    Ok(())
}
