//! Fixed values of the PontoMais web-app contract.
//!
//! The service only accepts requests that look like they come from its own
//! web client, so the browser fingerprint below mirrors a desktop Edge build.

pub const DEFAULT_API_URL: &str = "https://api.pontomais.com.br";
pub const DEFAULT_APP_URL: &str = "https://app2.pontomais.com.br";

pub const WORK_DAYS_PATH: &str = "/api/time_card_control/current/work_days";
pub const PROPOSALS_PATH: &str = "/api/time_cards/proposals";

/// Web-app route of the adjustment screen, echoed back in `_path`.
pub const ADJUSTMENT_ROUTE: &str = "/meu-ponto/ajuste";

pub const API_VERSION: &str = "2";
pub const APP_VERSION: &str = "0.10.32";
pub const DEFAULT_DEVICE_UUID: &str = "764c0af2-a116-4075-9d7a-12c3675f840e";

pub const SORT_DIRECTION: &str = "desc";
pub const SORT_PROPERTY: &str = "date";

// Browser impersonation
pub const ACCEPT: &str = "application/json, text/plain, */*";
pub const CONTENT_TYPE: &str = "application/json";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36 Edg/135.0.0.0";
pub const SEC_CH_UA: &str = r#""Microsoft Edge";v="135", "Not-A.Brand";v="8", "Chromium";v="135""#;
pub const SEC_CH_UA_MOBILE: &str = "?0";
pub const SEC_CH_UA_PLATFORM: &str = r#""Windows""#;
pub const SEC_FETCH_DEST: &str = "empty";
pub const SEC_FETCH_MODE: &str = "cors";
pub const SEC_FETCH_SITE: &str = "same-site";

pub const BROWSER_NAME: &str = "chrome";
pub const BROWSER_VERSION: &str = "135.0.0.0";
