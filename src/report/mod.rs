pub mod store;
pub mod types;

pub use types::{urgency_label, Report, ReportSummary, Status, URGENCY_LABELS};
