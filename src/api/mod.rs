//! Access to the PontoMais time-card service.

pub mod client;
pub mod constants;
pub mod headers;

use chrono::NaiveDate;

use crate::errors::AppResult;
use crate::models::{ProposalRequest, WorkDay};

pub use client::PontoMaisClient;

/// The two calls the correction run needs from the remote service.
pub trait TimeCardApi {
    /// Work days between `start` and `end` (inclusive). An empty list means
    /// the service has no data for the range.
    fn work_days(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<WorkDay>>;

    /// Submit one correction proposal. `Ok` only when the service answers 201.
    fn submit_proposal(&self, request: &ProposalRequest) -> AppResult<()>;
}
