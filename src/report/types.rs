//! Report row and the fixed vocabularies of the reports table.
//!
//! Defines [`Status`] (the workflow states a report moves through),
//! [`Report`] (one listed row), and the urgency label lookup.

use crate::error::ReportError;

/// Workflow state of a report, stored as its Korean label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 접수, just submitted.
    Received,
    /// 검토중
    UnderReview,
    /// 처리중
    InProgress,
    /// 완료, repair finished.
    Completed,
}

impl Status {
    /// Every accepted status, in workflow order.
    pub const ALL: [Status; 4] = [
        Self::Received,
        Self::UnderReview,
        Self::InProgress,
        Self::Completed,
    ];

    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "접수",
            Self::UnderReview => "검토중",
            Self::InProgress => "처리중",
            Self::Completed => "완료",
        }
    }

    /// The accepted values joined for display, e.g. `접수, 검토중, 처리중, 완료`.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(Status::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ReportError::InvalidStatus(s.to_string()))
    }
}

/// Urgency labels indexed by `urgency_level - 1`, lowest first.
pub const URGENCY_LABELS: [&str; 5] = ["낮음", "보통", "높음", "매우높음", "긴급"];

/// Label for an urgency level in `1..=5`.
///
/// Out-of-range levels are rejected rather than clamped; `id` only feeds the
/// error message.
pub fn urgency_label(id: i64, level: i64) -> Result<&'static str, ReportError> {
    usize::try_from(level)
        .ok()
        .and_then(|level| level.checked_sub(1))
        .and_then(|index| URGENCY_LABELS.get(index).copied())
        .ok_or(ReportError::UrgencyOutOfRange { id, level })
}

/// A report row as shown by the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i64,
    pub damage_type: String,
    /// Kept as stored; the producer may write values outside [`Status::ALL`].
    pub status: String,
    pub urgency_level: i64,
    /// Rendered from whatever storage class the column holds.
    pub created_at: String,
}

impl Report {
    pub fn urgency_label(&self) -> Result<&'static str, ReportError> {
        urgency_label(self.id, self.urgency_level)
    }
}

/// The fields shown before deleting a single report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub id: i64,
    pub damage_type: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_only_allowed_values() {
        assert_eq!("완료".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!("검토중".parse::<Status>().unwrap(), Status::UnderReview);
        assert!(matches!(
            "보류".parse::<Status>(),
            Err(ReportError::InvalidStatus(s)) if s == "보류"
        ));
        assert!("".parse::<Status>().is_err());
        assert!(" 완료".parse::<Status>().is_err());
    }

    #[test]
    fn allowed_list_is_in_workflow_order() {
        assert_eq!(Status::allowed_list(), "접수, 검토중, 처리중, 완료");
    }

    #[test]
    fn urgency_levels_map_to_labels() {
        for (i, label) in URGENCY_LABELS.iter().enumerate() {
            assert_eq!(urgency_label(1, i as i64 + 1).unwrap(), *label);
        }
        assert_eq!(urgency_label(1, 2).unwrap(), "보통");
    }

    #[test]
    fn out_of_range_urgency_is_rejected() {
        for level in [0, 6, -1, i64::MIN, i64::MAX] {
            assert!(matches!(
                urgency_label(7, level),
                Err(ReportError::UrgencyOutOfRange { id: 7, level: l }) if l == level
            ));
        }
    }
}
