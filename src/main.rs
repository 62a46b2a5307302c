//! jwt-fetch - exchange a username and password for a JWT

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::{Cli, Commands, ConfigCommands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Configure env_logger; `--debug` forces debug level, otherwise RUST_LOG applies
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Token(args) => cli::token::run(&opts, args).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::SetEndpoint { url } => cli::config::set_endpoint(&opts, &url),
        },
        Commands::Version => {
            println!("jwt-fetch version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
