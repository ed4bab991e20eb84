//! Typed errors for conditions the report store cannot recover from.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A status string outside the four accepted values.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// A stored urgency level with no matching label.
    #[error("report #{id} has urgency level {level}, expected 1..=5")]
    UrgencyOutOfRange { id: i64, level: i64 },

    #[error("no `reports` table in {}", .0.display())]
    MissingTable(PathBuf),
}
