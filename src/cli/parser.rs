use clap::Parser;
use std::path::PathBuf;

use crate::config::Credentials;

/// Command-line interface definition for rPontoMais
/// CLI application that backfills missing punches on PontoMais
#[derive(Parser, Debug)]
#[command(
    name = "rpontomais",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find unpunched absences on PontoMais and submit correction proposals",
    long_about = None
)]
pub struct Cli {
    /// PontoMais access token (also sent as `Token`)
    #[arg(long = "access-token", value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// User UID (usually the login e-mail)
    #[arg(long = "uid", value_name = "UID")]
    pub uid: Option<String>,

    /// Client id of the web session
    #[arg(long = "client", value_name = "CLIENT")]
    pub client: Option<String>,

    /// Device UUID sent in the `Uuid` header (defaults to the web-app device)
    #[arg(long = "uuid", value_name = "UUID")]
    pub uuid: Option<String>,

    /// First month to scan, walking backward from it (default: current month)
    #[arg(long = "from", value_name = "YYYY-MM")]
    pub from: Option<String>,

    /// Scan and list the days to adjust without submitting anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Use this configuration file instead of ~/.rpontomais/rpontomais.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Override the API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Stop the backward walk after this many months
    #[arg(long = "max-months", value_name = "N")]
    pub max_months: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// `None` when any required credential is missing or empty.
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(
            self.access_token.as_deref(),
            self.uid.as_deref(),
            self.client.as_deref(),
            self.uuid.as_deref(),
        )
    }
}

pub fn print_usage() {
    println!("Usage: rpontomais --access-token=<ACCESS_TOKEN> --uid=<UID> --client=<CLIENT>");
    println!("Required parameters:");
    println!("  --access-token: PontoMais access token");
    println!("  --uid:          user UID");
    println!("  --client:       client id");
    println!("Run `rpontomais --help` for all options.");
}
