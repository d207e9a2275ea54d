use crate::api::PontoMaisClient;
use crate::cli::parser::Cli;
use crate::config::{Config, Credentials};
use crate::core::adjust::AdjustLogic;
use crate::core::correction::CorrectionTemplate;
use crate::core::month::MonthCursor;
use crate::core::scan::ScanPolicy;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;

/// Scan past months and submit a correction for every eligible absence.
pub fn handle(cli: &Cli, cfg: &Config, credentials: Credentials) -> AppResult<()> {
    //
    // 1. Starting month (default = current month)
    //
    let start = match &cli.from {
        Some(s) => MonthCursor::parse(s)?,
        None => MonthCursor::containing(date::today()),
    };

    //
    // 2. Correction template and scan policy
    //
    let template = CorrectionTemplate::from_config(cfg)?;
    let policy = ScanPolicy {
        absence_status: cfg.absence_status.clone(),
        max_months: cfg.max_months,
    };

    //
    // 3. HTTP client
    //
    let client = PontoMaisClient::new(credentials, cfg)?;
    info(format!("Using API at {}", client.api_url()));

    //
    // 4. Execute logic
    //
    AdjustLogic::apply(&client, start, &policy, &template, cli.dry_run);

    Ok(())
}
