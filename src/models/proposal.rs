use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub date: NaiveDate,
    /// HH:MM
    pub time: String,
    pub edited: bool,
}

/// Correction proposal body: the punches to backfill for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectionProposal {
    pub date: NaiveDate,
    pub motive: String,
    pub times_attributes: Vec<TimeEntry>,
    pub proposal_type: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Browser {
    pub name: String,
    pub version: String,
    #[serde(rename = "versionSearchString")]
    pub version_search_string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub browser: Browser,
}

/// Full POST body for the proposals endpoint, including the web-app metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalRequest {
    pub proposal: CorrectionProposal,
    #[serde(rename = "_path")]
    pub path: String,
    #[serde(rename = "_device")]
    pub device: Device,
    #[serde(rename = "_appVersion")]
    pub app_version: String,
}
