use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use outband_cli::OutbandArgs;
use outband_reporter::FailedCall;
use outband_types::{Failure, ObservedResponse, OriginalRequest};

#[derive(Parser, Debug)]
#[command(name = "outband", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a failure report from the given call details and submit it.
    Report(ReportArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub args: OutbandArgs,

    /// URL of the failed downstream request.
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// Payload of the failed request.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub request_body: String,

    /// HTTP status returned by the downstream service. Omit when no response was received.
    #[arg(long, value_name = "CODE")]
    pub status: Option<u16>,

    /// Body returned by the downstream service. Ignored without `--status`.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub response_body: String,

    /// Description of the original failure.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub message: String,

    /// Label attached to the report. May be repeated; order is kept.
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// When the failed call started (RFC 3339). Defaults to the time the command starts.
    #[arg(long, value_name = "TIMESTAMP")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the failed call ended (RFC 3339). Defaults to the time just before submission.
    #[arg(long, value_name = "TIMESTAMP")]
    pub ended_at: Option<DateTime<Utc>>,
}

impl ReportArgs {
    pub fn failed_call(&self, started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> FailedCall {
        let response = match self.status {
            Some(status) => ObservedResponse::http(status, self.response_body.as_str()),
            None => ObservedResponse::NoResponse,
        };

        let call = FailedCall::new(
            Failure::new(self.message.as_str()),
            OriginalRequest::new(self.url.as_str(), self.request_body.as_str()),
            response,
            self.started_at.unwrap_or(started_at),
            self.ended_at.unwrap_or(ended_at),
        );

        if self.tags.is_empty() {
            return call;
        }
        call.with_tags(self.tags.clone())
    }
}
