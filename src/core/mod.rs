pub mod adjust;
pub mod correction;
pub mod eligibility;
pub mod month;
pub mod policy;
pub mod scan;
