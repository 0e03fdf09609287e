//! sso-cli - Log in to the BUAA unified authentication from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments, load configuration, and run one
//!   login attempt via the shared client library.
//! - Print the resulting ticket URL to stdout; everything else goes to
//!   stderr.
//!
//! Does NOT handle:
//! - Consuming the ticket or storing session state (that is the
//!   downstream site's job).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are
//!   visible to the config loader.
//! - Configuration precedence: CLI flags > environment > profile file.

mod args;
mod error;

use args::Cli;
use clap::Parser;
use error::ExitCode;
use sso_client::SsoClient;
use sso_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(location) => {
            println!("{}", location);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(ExitCode::from_error(&e).as_i32());
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = build_config(cli)?;
    let service_url = config.endpoints.service_url.clone();

    let client = SsoClient::from_config(config);
    let location = client.login(&service_url).await?;
    Ok(location)
}

/// Build the configuration: profile file first, then environment, then
/// CLI flags on top.
fn build_config(cli: Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    if let Some(path) = cli.config_path {
        loader = loader.with_config_path(path);
    }
    loader = loader.load_profile()?.from_env()?;

    if let Some(username) = cli.username {
        loader = loader.with_username(username);
    }
    if let Some(password) = cli.password {
        loader = loader.with_password(password);
    }
    if let Some(user_agent) = cli.user_agent {
        loader = loader.with_user_agent(user_agent);
    }
    if let Some(url) = cli.login_page_url {
        loader = loader.with_login_page_url(url);
    }
    if let Some(url) = cli.login_url {
        loader = loader.with_login_url(url);
    }
    if let Some(url) = cli.service_url {
        loader = loader.with_service_url(url);
    }

    loader.build()
}
