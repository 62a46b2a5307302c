//! Token command implementation

use std::io::Write;

use clap::Args;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{AuthApi, CredentialExchangeClient, Credentials};
use crate::error::Result;
use crate::output;

/// Arguments for the token command
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Username sent in the `user` header
    #[arg(long, short = 'u', env = "JWT_FETCH_USER", hide_env = true)]
    pub username: String,

    /// Password sent in the `password` header (prompted when omitted)
    #[arg(long, env = "JWT_FETCH_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Run the token command
pub async fn run(opts: &GlobalOptions, args: TokenArgs) -> Result<()> {
    let config = opts.load_config()?;
    let client = CredentialExchangeClient::from_config(&config)?;

    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Password for {}", args.username))
            .allow_empty_password(true)
            .interact()?,
    };

    let credentials = Credentials::new(args.username, password);
    let mut out = std::io::stdout().lock();
    fetch_and_write(&client, client.endpoint(), &credentials, opts.format, &mut out).await
}

/// Perform one exchange and write the response
pub async fn fetch_and_write<A, W>(
    api: &A,
    endpoint: &str,
    credentials: &Credentials,
    format: OutputFormat,
    out: &mut W,
) -> Result<()>
where
    A: AuthApi + ?Sized,
    W: Write,
{
    let response = api.fetch_token(credentials).await?;
    output::write_token(out, endpoint, &response, format)
}
