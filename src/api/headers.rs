use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

use super::constants as wire;
use crate::config::Credentials;
use crate::errors::{AppError, AppResult};

fn put(map: &mut HeaderMap, name: HeaderName, value: &str) -> AppResult<()> {
    let value = HeaderValue::from_str(value)
        .map_err(|_| AppError::Config(format!("invalid value for header '{}'", name.as_str())))?;
    map.insert(name, value);
    Ok(())
}

/// Browser fingerprint plus the session headers every API call needs.
pub fn session_headers(creds: &Credentials) -> AppResult<HeaderMap> {
    let mut map = HeaderMap::new();

    put(&mut map, header::ACCEPT, wire::ACCEPT)?;
    put(&mut map, header::CONTENT_TYPE, wire::CONTENT_TYPE)?;
    put(&mut map, header::USER_AGENT, wire::USER_AGENT)?;

    put(&mut map, HeaderName::from_static("access-token"), &creds.access_token)?;
    put(&mut map, HeaderName::from_static("token"), &creds.token)?;
    put(&mut map, HeaderName::from_static("api-version"), wire::API_VERSION)?;
    put(&mut map, HeaderName::from_static("uid"), &creds.uid)?;
    put(&mut map, HeaderName::from_static("client"), &creds.client)?;
    put(&mut map, HeaderName::from_static("uuid"), &creds.uuid)?;

    put(&mut map, HeaderName::from_static("sec-ch-ua"), wire::SEC_CH_UA)?;
    put(&mut map, HeaderName::from_static("sec-ch-ua-mobile"), wire::SEC_CH_UA_MOBILE)?;
    put(&mut map, HeaderName::from_static("sec-ch-ua-platform"), wire::SEC_CH_UA_PLATFORM)?;
    put(&mut map, HeaderName::from_static("sec-fetch-dest"), wire::SEC_FETCH_DEST)?;
    put(&mut map, HeaderName::from_static("sec-fetch-mode"), wire::SEC_FETCH_MODE)?;
    put(&mut map, HeaderName::from_static("sec-fetch-site"), wire::SEC_FETCH_SITE)?;

    Ok(map)
}

/// Session headers plus the Origin/Referer the proposals endpoint checks.
pub fn proposal_headers(creds: &Credentials, app_url: &str) -> AppResult<HeaderMap> {
    let mut map = session_headers(creds)?;
    let origin = app_url.trim_end_matches('/');

    put(&mut map, header::ORIGIN, origin)?;
    put(&mut map, header::REFERER, &format!("{origin}/"))?;

    Ok(map)
}
