use chrono::{NaiveDate, NaiveTime};

use crate::api::TimeCardApi;
use crate::api::constants::{ADJUSTMENT_ROUTE, APP_VERSION, BROWSER_NAME, BROWSER_VERSION};
use crate::config::Config;
use crate::core::policy::{DEFAULT_MOTIVE, DEFAULT_SCHEDULE, PROPOSAL_TYPE_ADJUSTMENT};
use crate::errors::AppResult;
use crate::models::{Browser, CorrectionProposal, Device, ProposalRequest, TimeEntry, WorkDay};
use crate::utils::time::{format_hhmm, parse_time};

/// Fixed punches and motive applied to every flagged day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionTemplate {
    pub motive: String,
    pub schedule: Vec<NaiveTime>,
}

impl Default for CorrectionTemplate {
    fn default() -> Self {
        Self {
            motive: DEFAULT_MOTIVE.to_string(),
            schedule: DEFAULT_SCHEDULE.iter().filter_map(|t| parse_time(t)).collect(),
        }
    }
}

impl CorrectionTemplate {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            motive: cfg.motive.clone(),
            schedule: cfg.schedule_times()?,
        })
    }

    pub fn proposal_for(&self, day: &WorkDay) -> CorrectionProposal {
        CorrectionProposal {
            date: day.date,
            motive: self.motive.clone(),
            times_attributes: self
                .schedule
                .iter()
                .map(|t| TimeEntry {
                    date: day.date,
                    time: format_hhmm(*t),
                    edited: true,
                })
                .collect(),
            proposal_type: PROPOSAL_TYPE_ADJUSTMENT,
        }
    }

    /// Complete POST body for `day`, web-app metadata included.
    pub fn request_for(&self, day: &WorkDay) -> ProposalRequest {
        ProposalRequest {
            proposal: self.proposal_for(day),
            path: adjustment_path(day),
            device: web_device(),
            app_version: APP_VERSION.to_string(),
        }
    }
}

/// Web-app route of the adjustment screen for `day`,
/// e.g. `/meu-ponto/ajuste/2025-04-29;id=1991631201`.
pub fn adjustment_path(day: &WorkDay) -> String {
    format!("{}/{};id={}", ADJUSTMENT_ROUTE, day.date.format("%Y-%m-%d"), day.id)
}

fn web_device() -> Device {
    Device {
        browser: Browser {
            name: BROWSER_NAME.to_string(),
            version: BROWSER_VERSION.to_string(),
            version_search_string: BROWSER_NAME.to_string(),
        },
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SubmissionReport {
    pub submitted: Vec<NaiveDate>,
    pub failed: Vec<(NaiveDate, String)>,
}

impl SubmissionReport {
    pub fn attempted(&self) -> usize {
        self.submitted.len() + self.failed.len()
    }
}

/// Submit one proposal per day. A failure is recorded and the next day is
/// still attempted; nothing is retried.
pub fn submit_all<A, B, F>(
    api: &A,
    template: &CorrectionTemplate,
    days: &[WorkDay],
    mut before: B,
    mut after: F,
) -> SubmissionReport
where
    A: TimeCardApi + ?Sized,
    B: FnMut(&WorkDay),
    F: FnMut(&WorkDay, &AppResult<()>),
{
    let mut report = SubmissionReport::default();

    for day in days {
        before(day);
        let request = template.request_for(day);
        let result = api.submit_proposal(&request);
        after(day, &result);

        match result {
            Ok(()) => report.submitted.push(day.date),
            Err(e) => {
                log::warn!("proposal for {} failed: {e}", day.date);
                report.failed.push((day.date, e.to_string()));
            }
        }
    }

    report
}
