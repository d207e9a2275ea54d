use crate::api::TimeCardApi;
use crate::core::correction::{CorrectionTemplate, SubmissionReport, adjustment_path, submit_all};
use crate::core::month::MonthCursor;
use crate::core::scan::{ScanOutcome, ScanPolicy, StopReason, scan_months};
use crate::ui::messages::{detail, error, header, info, success, summary_line, warning};

/// What a full run did: the scan result and, unless dry-run, the submissions.
#[derive(Debug)]
pub struct RunReport {
    pub scan: ScanOutcome,
    pub submissions: Option<SubmissionReport>,
}

/// High-level business logic of a correction run.
pub struct AdjustLogic;

impl AdjustLogic {
    pub fn apply<A: TimeCardApi + ?Sized>(
        api: &A,
        start: MonthCursor,
        policy: &ScanPolicy,
        template: &CorrectionTemplate,
        dry_run: bool,
    ) -> RunReport {
        // ------------------------------------------------
        // 1️⃣ SCAN
        // ------------------------------------------------
        header(format!("Scanning work days from {start} backward"));

        let scan = scan_months(api, start, policy, |m| {
            info(format!(
                "{}: {} days, {} absences, {} to adjust",
                m.month, m.days, m.absences, m.for_adjustment
            ));
        });

        match &scan.stop {
            StopReason::EmptyMonth(m) => info(format!("No data found for {m}")),
            other => warning(other),
        }

        header("Summary");
        summary_line("Months analysed:", scan.totals.months);
        summary_line("Days analysed:", scan.totals.days);
        summary_line("Absences found:", scan.totals.absences);
        summary_line("Absences to adjust:", scan.totals.for_adjustment);

        if scan.flagged.is_empty() {
            success("Nothing to adjust");
            return RunReport {
                scan,
                submissions: None,
            };
        }

        // ------------------------------------------------
        // 2️⃣ DRY RUN
        // ------------------------------------------------
        if dry_run {
            header("Days to adjust (dry run, nothing submitted)");
            for day in &scan.flagged {
                detail(format!("{}  {}", day.date, adjustment_path(day)));
            }
            return RunReport {
                scan,
                submissions: None,
            };
        }

        // ------------------------------------------------
        // 3️⃣ SUBMIT
        // ------------------------------------------------
        header("Submitting corrections");

        let report = submit_all(
            api,
            template,
            &scan.flagged,
            |day| info(format!("Adjusting {}...", day.date)),
            |day, result| match result {
                Ok(()) => success(format!("Adjusted {}", day.date)),
                Err(e) => error(format!("Could not adjust {}: {}", day.date, e)),
            },
        );

        if report.failed.is_empty() {
            success(format!(
                "Adjustment completed: {} proposal(s) submitted",
                report.submitted.len()
            ));
        } else {
            warning(format!(
                "Adjustment completed: {} of {} submitted, {} failed",
                report.submitted.len(),
                report.attempted(),
                report.failed.len()
            ));
        }

        RunReport {
            scan,
            submissions: Some(report),
        }
    }
}
