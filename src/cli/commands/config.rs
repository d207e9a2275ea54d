use std::path::Path;

use crate::config::Config;
use crate::errors::AppResult;

/// Print the effective configuration (file + command-line overrides) as YAML.
pub fn handle(cfg: &Config, source: &Path) -> AppResult<()> {
    println!("# source: {}", source.display());
    print!("{}", cfg.to_yaml()?);
    Ok(())
}
