//! Correction policy defaults. Every value here can be overridden from the
//! configuration file.

/// Status label the service uses for a day without any punch.
pub const ABSENCE_STATUS: &str = "Absence";

/// Justification attached to every proposal.
pub const DEFAULT_MOTIVE: &str = "Esqueci de apontar os horarios GoAjuste";

/// Four punches of a standard day: in, lunch out, lunch in, out.
pub const DEFAULT_SCHEDULE: [&str; 4] = ["08:00", "12:00", "13:00", "17:00"];

/// `proposal_type` value for a time-card adjustment.
pub const PROPOSAL_TYPE_ADJUSTMENT: u8 = 1;

/// Upper bound on the backward walk (ten years).
pub const DEFAULT_MAX_MONTHS: usize = 120;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
