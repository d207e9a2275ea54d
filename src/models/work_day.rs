use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode an explicit `null` as the type's zero value, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{id, name}` pair used by the service for both day status and process status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Marker for a correction request already pending on the day.
///
/// The service sends an arbitrary object (or a bare string) here; only its
/// presence matters, so the raw JSON is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposalStatus(pub serde_json::Value);

/// One calendar day's attendance record as returned by the work-days endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkDay {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub process_status: Option<Status>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allow_exemption_allowance: bool,
    #[serde(default)]
    pub last_solicitation_proposal_status: Option<ProposalStatus>,
}

impl WorkDay {
    pub fn status_name(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.name.as_str())
    }

    /// True when a correction proposal already exists for this day.
    pub fn has_pending_proposal(&self) -> bool {
        self.last_solicitation_proposal_status.is_some()
    }
}

/// Response envelope of the work-days endpoint.
#[derive(Debug, Deserialize)]
pub struct WorkDaysEnvelope {
    #[serde(default)]
    pub work_days: Vec<WorkDay>,
}
