//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `sso-config`); flags given here
//!   override profile-file and environment values.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sso-cli")]
#[command(about = "Log in to the BUAA unified authentication (CAS SSO) and print the ticket URL", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  SSO_USERNAME=by2112345 SSO_PASSWORD=... sso-cli\n  sso-cli --config-path ~/.config/sso/profile.json\n  sso-cli --service-url 'https://sso.buaa.edu.cn/login?TARGET=...'\n"
)]
pub struct Cli {
    /// SSO username (student or staff id)
    #[arg(short, long)]
    pub username: Option<String>,

    /// SSO password
    #[arg(short, long)]
    pub password: Option<String>,

    /// User-Agent header sent on the login requests
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Target-service URL recorded with the attempt
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// URL of the login page the execution token is fetched from
    #[arg(long, value_name = "URL")]
    pub login_page_url: Option<String>,

    /// URL the credential form is POSTed to
    #[arg(long, value_name = "URL")]
    pub login_url: Option<String>,

    /// Path to a JSON profile file (overrides SSO_CONFIG_PATH)
    #[arg(long, value_name = "FILE")]
    pub config_path: Option<PathBuf>,
}
