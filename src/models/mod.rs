pub mod proposal;
pub mod work_day;

pub use proposal::{Browser, CorrectionProposal, Device, ProposalRequest, TimeEntry};
pub use work_day::{ProposalStatus, Status, WorkDay, WorkDaysEnvelope};
