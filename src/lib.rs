//! rPontoMais library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logger;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, print_usage};
use config::Config;
use errors::AppResult;

/// Load the config file selected on the command line (or the default one)
/// and apply the command-line overrides on top of it.
pub fn effective_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }
    if let Some(n) = cli.max_months {
        cfg.max_months = n;
    }
    if let Some(secs) = cli.timeout {
        cfg.timeout_secs = secs;
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logger::init_logger();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    if cli.print_config {
        let cfg = effective_config(&cli)?;
        let source = cli.config.clone().unwrap_or_else(Config::config_file);
        return cli::commands::config::handle(&cfg, &source);
    }

    // 2️⃣ credentials first: nothing is loaded or sent without them
    let Some(credentials) = cli.credentials() else {
        print_usage();
        return Ok(());
    };

    // 3️⃣ config + overrides
    let cfg = effective_config(&cli)?;

    // 4️⃣ run
    cli::commands::adjust::handle(&cli, &cfg, credentials)
}
