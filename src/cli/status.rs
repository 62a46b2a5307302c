//! Status command implementation

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::{Config, DEFAULT_ENDPOINT};
use crate::error::Result;
use crate::output::json::format_json;

/// Resolved configuration as rendered in JSON output
#[derive(Debug, Serialize)]
struct StatusOutput<'a> {
    config_path: String,
    config_found: bool,
    #[serde(flatten)]
    config: &'a Config,
}

impl<'a> StatusOutput<'a> {
    fn new(path: &Path, config: &'a Config) -> Self {
        Self {
            config_path: path.display().to_string(),
            config_found: path.exists(),
            config,
        }
    }
}

/// Run the status command to display the resolved configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let config = opts.load_config()?;

    if opts.format == OutputFormat::Json {
        println!("{}", format_json(&StatusOutput::new(&path, &config))?);
        return Ok(());
    }

    println!("{}\n", "jwt-fetch Configuration Status".bold());

    if path.exists() {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    println!("Endpoint: {}", config.endpoint.bold());
    if config.endpoint == DEFAULT_ENDPOINT {
        println!("{} Endpoint is the built-in placeholder", "⚠".yellow());
        println!("  → Run 'jwt-fetch config set-endpoint <URL>' to configure");
    }

    match config.timeout_secs {
        Some(secs) => println!("Timeout: {}s", secs),
        None => println!("Timeout: {}", "transport default".dimmed()),
    }

    Ok(())
}
