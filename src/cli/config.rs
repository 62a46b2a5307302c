//! Config command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Persist a new endpoint, creating the config file if needed
pub fn set_endpoint(opts: &GlobalOptions, url: &str) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;

    let mut config = match Config::load_from(path.clone()) {
        Err(Error::Config(ConfigError::NotFound(_))) => Config::default(),
        other => other?,
    };
    config.set_endpoint(url)?;
    config.save_to(path.clone())?;

    log::debug!("Saved endpoint to {}", path.display());
    println!("{} Endpoint set to {}", "✓".green(), config.endpoint.bold());
    Ok(())
}
