use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;

use super::TimeCardApi;
use super::constants::{PROPOSALS_PATH, SORT_DIRECTION, SORT_PROPERTY, WORK_DAYS_PATH};
use super::headers::{proposal_headers, session_headers};
use crate::config::{Config, Credentials};
use crate::errors::{AppError, AppResult};
use crate::models::{ProposalRequest, WorkDay, WorkDaysEnvelope};
use crate::utils::date::format_iso;

/// Blocking HTTP client for the PontoMais API. One request in flight at a
/// time, each bounded by the configured timeout.
pub struct PontoMaisClient {
    http: Client,
    api_url: String,
    app_url: String,
    credentials: Credentials,
}

impl PontoMaisClient {
    pub fn new(credentials: Credentials, cfg: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: cfg.api_url.trim_end_matches('/').to_string(),
            app_url: cfg.app_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

impl TimeCardApi for PontoMaisClient {
    fn work_days(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<WorkDay>> {
        let url = self.endpoint(WORK_DAYS_PATH);
        log::debug!("GET {url} [{start} .. {end}]");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("start_date", format_iso(start)),
                ("end_date", format_iso(end)),
                ("sort_direction", SORT_DIRECTION.to_string()),
                ("sort_property", SORT_PROPERTY.to_string()),
            ])
            .headers(session_headers(&self.credentials)?)
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        parse_work_days(&body)
    }

    fn submit_proposal(&self, request: &ProposalRequest) -> AppResult<()> {
        let url = self.endpoint(PROPOSALS_PATH);
        log::debug!("POST {url} {}", request.path);

        let response = self
            .http
            .post(&url)
            .headers(proposal_headers(&self.credentials, &self.app_url)?)
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        log::debug!("proposal response: {status}");

        check_submission(status, body)
    }
}

/// Decode the `{ "work_days": [...] }` envelope.
pub fn parse_work_days(body: &str) -> AppResult<Vec<WorkDay>> {
    let envelope: WorkDaysEnvelope = serde_json::from_str(body)?;
    Ok(envelope.work_days)
}

/// Only `201 Created` counts as an accepted proposal.
pub fn check_submission(status: StatusCode, body: String) -> AppResult<()> {
    if status == StatusCode::CREATED {
        Ok(())
    } else {
        Err(AppError::Submission {
            status: status.as_u16(),
            body,
        })
    }
}
