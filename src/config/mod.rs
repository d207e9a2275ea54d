use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::constants::{DEFAULT_API_URL, DEFAULT_APP_URL};
use crate::core::policy;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;

pub mod credentials;

pub use credentials::Credentials;

/// Run settings loaded from `rpontomais.conf` (YAML). Every field is optional
/// in the file and falls back to the built-in policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_app_url")]
    pub app_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_months")]
    pub max_months: usize,
    #[serde(default = "default_absence_status")]
    pub absence_status: String,
    #[serde(default = "default_motive")]
    pub motive: String,
    #[serde(default = "default_schedule")]
    pub schedule: Vec<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_app_url() -> String {
    DEFAULT_APP_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    policy::DEFAULT_TIMEOUT_SECS
}
fn default_max_months() -> usize {
    policy::DEFAULT_MAX_MONTHS
}
fn default_absence_status() -> String {
    policy::ABSENCE_STATUS.to_string()
}
fn default_motive() -> String {
    policy::DEFAULT_MOTIVE.to_string()
}
fn default_schedule() -> Vec<String> {
    policy::DEFAULT_SCHEDULE.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            app_url: default_app_url(),
            timeout_secs: default_timeout_secs(),
            max_months: default_max_months(),
            absence_status: default_absence_status(),
            motive: default_motive(),
            schedule: default_schedule(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rpontomais")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpontomais")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpontomais.conf")
    }

    /// Load the default config file, or return defaults if it does not exist
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::debug!("no config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load an explicit config file; unlike `load`, the file must exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        log::debug!("configuration loaded from {}", path.display());
        Ok(cfg)
    }

    /// Reject values that would make the run meaningless or unbounded.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_months == 0 {
            return Err(AppError::Config("max_months must be at least 1".into()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout_secs must be at least 1".into()));
        }
        if self.absence_status.trim().is_empty() {
            return Err(AppError::Config("absence_status cannot be empty".into()));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        if self.schedule.is_empty() {
            return Err(AppError::Config("schedule needs at least one time".into()));
        }
        self.schedule_times()?;
        Ok(())
    }

    /// Parsed correction schedule, in the configured order.
    pub fn schedule_times(&self) -> AppResult<Vec<NaiveTime>> {
        self.schedule
            .iter()
            .map(|t| parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone())))
            .collect()
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
