//! Backward month-by-month walk over the work-day history.
//!
//! The walk starts at a given month and fetches one month at a time until the
//! service returns an empty month, a fetch fails, or the `max_months`
//! safeguard is reached. Counters and the list of flagged days are owned by a
//! [`ScanAccumulator`] threaded through the loop and returned as a
//! [`ScanOutcome`].

use std::fmt;

use crate::api::TimeCardApi;
use crate::core::eligibility::{DayClass, classify};
use crate::core::month::MonthCursor;
use crate::models::WorkDay;

#[derive(Debug, Clone)]
pub struct ScanPolicy {
    pub absence_status: String,
    pub max_months: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub months: usize,
    pub days: usize,
    pub absences: usize,
    pub for_adjustment: usize,
}

/// Per-month counts, reported as soon as the month is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: MonthCursor,
    pub days: usize,
    pub absences: usize,
    pub for_adjustment: usize,
}

/// Why the walk ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    EmptyMonth(MonthCursor),
    FetchFailed { month: MonthCursor, error: String },
    SafeguardReached { max_months: usize },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EmptyMonth(m) => write!(f, "no data found for {m}"),
            StopReason::FetchFailed { month, error } => {
                write!(f, "failed to fetch {month}: {error}")
            }
            StopReason::SafeguardReached { max_months } => {
                write!(f, "stopped after {max_months} months (max_months safeguard)")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub totals: ScanTotals,
    pub months: Vec<MonthSummary>,
    /// Eligible days, newest month first, in the order the service returned them.
    pub flagged: Vec<WorkDay>,
    pub stop: StopReason,
}

#[derive(Debug, Default)]
pub struct ScanAccumulator {
    totals: ScanTotals,
    months: Vec<MonthSummary>,
    flagged: Vec<WorkDay>,
}

impl ScanAccumulator {
    /// Fold one month's records into the running state.
    pub fn absorb(
        &mut self,
        month: MonthCursor,
        days: Vec<WorkDay>,
        absence_status: &str,
    ) -> MonthSummary {
        let mut summary = MonthSummary {
            month,
            days: days.len(),
            absences: 0,
            for_adjustment: 0,
        };

        for day in days {
            let class = classify(&day, absence_status);
            if class.is_absence() {
                summary.absences += 1;
            }
            if class == DayClass::Eligible {
                summary.for_adjustment += 1;
                self.flagged.push(day);
            }
        }

        self.totals.months += 1;
        self.totals.days += summary.days;
        self.totals.absences += summary.absences;
        self.totals.for_adjustment += summary.for_adjustment;
        self.months.push(summary);
        summary
    }

    pub fn months_seen(&self) -> usize {
        self.totals.months
    }

    pub fn finish(self, stop: StopReason) -> ScanOutcome {
        ScanOutcome {
            totals: self.totals,
            months: self.months,
            flagged: self.flagged,
            stop,
        }
    }
}

/// Walk backward from `start`, calling `on_month` after each processed month.
pub fn scan_months<A, F>(
    api: &A,
    start: MonthCursor,
    policy: &ScanPolicy,
    mut on_month: F,
) -> ScanOutcome
where
    A: TimeCardApi + ?Sized,
    F: FnMut(&MonthSummary),
{
    let mut acc = ScanAccumulator::default();
    let mut cursor = start;

    let stop = loop {
        if acc.months_seen() >= policy.max_months {
            break StopReason::SafeguardReached {
                max_months: policy.max_months,
            };
        }

        let fetched = cursor
            .bounds()
            .and_then(|(first, last)| api.work_days(first, last));

        match fetched {
            Err(e) => {
                log::warn!("fetch for {cursor} failed: {e}");
                break StopReason::FetchFailed {
                    month: cursor,
                    error: e.to_string(),
                };
            }
            Ok(days) if days.is_empty() => break StopReason::EmptyMonth(cursor),
            Ok(days) => {
                let summary = acc.absorb(cursor, days, &policy.absence_status);
                log::debug!("{cursor}: {summary:?}");
                on_month(&summary);
            }
        }

        cursor = cursor.previous();
    };

    acc.finish(stop)
}
