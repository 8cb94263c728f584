use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::options::{HttpOptions, ReporterOptions};

/// Options shared by every `outband` command.
#[derive(Debug, clap::Args, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct OutbandArgs {
    /// Configuration file
    #[arg(long, value_name = "PATH", help = "Configuration file to setup Outband.")]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub reporter: ReporterOptions,

    #[command(flatten)]
    pub http: HttpOptions,
}

impl OutbandArgs {
    /// Merges the configuration file, if any, under the values given on the command line.
    pub fn with_config_file(mut self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: OutbandArgsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        self.reporter.merge(config.reporter.as_ref());
        self.http.merge(config.http.as_ref());

        Ok(self)
    }
}

/// Layout of the TOML configuration file.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct OutbandArgsConfig {
    pub reporter: Option<ReporterOptions>,
    pub http: Option<HttpOptions>,
}
