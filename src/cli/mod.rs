//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod config;
pub mod status;
pub mod token;

pub use args::{GlobalOptions, OutputFormat};
pub use token::TokenArgs;

/// jwt-fetch - exchange a username and password for a JWT
#[derive(Parser, Debug)]
#[command(name = "jwt-fetch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (raw, json)
    #[arg(
        long,
        global = true,
        env = "JWT_FETCH_FORMAT",
        default_value = "raw",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "JWT_FETCH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the auth endpoint URL
    #[arg(long, global = true, env = "JWT_FETCH_ENDPOINT", hide_env = true)]
    pub endpoint: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "JWT_FETCH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exchange credentials for a token and print the response
    Token(TokenArgs),

    /// Show the resolved configuration
    Status,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Display version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Persist the auth endpoint URL
    SetEndpoint {
        /// Absolute http(s) URL of the credential exchange endpoint
        url: String,
    },
}
