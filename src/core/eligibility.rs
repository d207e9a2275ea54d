use crate::models::WorkDay;

/// How a fetched day counts toward the scan totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    /// Not an absence.
    Regular,
    /// Absence with a correction already pending.
    PendingAbsence,
    /// Absence with nothing pending: needs a proposal.
    Eligible,
}

impl DayClass {
    pub fn is_absence(self) -> bool {
        self != DayClass::Regular
    }
}

pub fn classify(day: &WorkDay, absence_status: &str) -> DayClass {
    if day.status_name() != Some(absence_status) {
        DayClass::Regular
    } else if day.has_pending_proposal() {
        DayClass::PendingAbsence
    } else {
        DayClass::Eligible
    }
}

