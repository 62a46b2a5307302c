//! Global CLI options shared across all commands
//!
//! Precedence for the endpoint is: CLI flag > environment variable > config
//! file > built-in placeholder. Clap resolves the first two; the rest happens
//! in [`GlobalOptions::load_config`].

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (raw, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.jwt-fetch/config.yaml)
    pub config: Option<String>,

    /// Endpoint override from flag or environment
    pub endpoint: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            endpoint: cli.endpoint.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Load the config file and apply the endpoint override
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_at(self.config_ref())?;
        if let Some(ref endpoint) = self.endpoint {
            config.set_endpoint(endpoint)?;
        }
        Ok(config)
    }
}
