//! Action item status and priority domains.
//!
//! Both columns are stored as plain `TEXT` in the `action_items` table. The
//! string forms below are the persisted values and the JSON wire values.
//!
//! Priority ordering is *lexical*, not by severity: sorting priorities
//! descending yields `medium`, `low`, `high`. Listings have always been
//! ordered that way and the order is kept as-is.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid action item statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_COMPLETED];

// ---------------------------------------------------------------------------
// Priority constants
// ---------------------------------------------------------------------------

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";

/// All valid action item priorities.
pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// Query-string value meaning "do not filter on this column".
pub const FILTER_ALL: &str = "all";

// ---------------------------------------------------------------------------
// ActionStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of an action item. New items start as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ActionStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    /// Whether moving an item into this status stamps `completed_at`.
    ///
    /// Moving away from `Completed` never clears the stamp.
    pub fn stamps_completion(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl FromStr for ActionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for ActionStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Action item priority. Defaults to `Medium`.
///
/// `Ord` compares the string forms, so `High < Low < Medium`. This is the
/// order listings have always used; do not replace it with a severity rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => PRIORITY_LOW,
            Self::Medium => PRIORITY_MEDIUM,
            Self::High => PRIORITY_HIGH,
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PRIORITY_LOW => Ok(Self::Low),
            PRIORITY_MEDIUM => Ok(Self::Medium),
            PRIORITY_HIGH => Ok(Self::High),
            other => Err(CoreError::Validation(format!(
                "Unknown priority: '{other}'. Valid priorities: {}",
                VALID_PRIORITIES.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Listing order
// ---------------------------------------------------------------------------

/// Compare two action items the way listings order them.
///
/// Due date ascending with undated items last, then priority descending
/// using the lexical [`Priority`] order. Mirrors the `ORDER BY` clause in
/// the action item repository.
pub fn listing_order(
    a_due: Option<Date>,
    a_priority: Priority,
    b_due: Option<Date>,
    b_priority: Priority,
) -> Ordering {
    let by_due = match (a_due, b_due) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_due.then_with(|| b_priority.cmp(&a_priority))
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Parse an optional `?status=` query value. Absent or `all` means no filter.
pub fn parse_status_filter(raw: Option<&str>) -> Result<Option<ActionStatus>, CoreError> {
    match raw {
        None | Some(FILTER_ALL) | Some("") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

/// Parse an optional `?priority=` query value. Absent or `all` means no filter.
pub fn parse_priority_filter(raw: Option<&str>) -> Result<Option<Priority>, CoreError> {
    match raw {
        None | Some(FILTER_ALL) | Some("") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(s: &str) -> Option<Date> {
        Some(s.parse().unwrap())
    }

    // -- parsing --------------------------------------------------------------

    #[test]
    fn valid_statuses_parse() {
        for s in VALID_STATUSES {
            let status: ActionStatus = s.parse().unwrap();
            assert_eq!(status.as_str(), *s);
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert_matches!("done".parse::<ActionStatus>(), Err(CoreError::Validation(_)));
        assert_matches!("".parse::<ActionStatus>(), Err(CoreError::Validation(_)));
        assert_matches!("Pending".parse::<ActionStatus>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn valid_priorities_parse() {
        for p in VALID_PRIORITIES {
            let priority: Priority = p.parse().unwrap();
            assert_eq!(priority.as_str(), *p);
        }
    }

    #[test]
    fn unknown_priority_rejected() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert!(err.to_string().contains("urgent"));
    }

    #[test]
    fn defaults_are_pending_and_medium() {
        assert_eq!(ActionStatus::default(), ActionStatus::Pending);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn serde_uses_database_strings() {
        assert_eq!(
            serde_json::to_string(&ActionStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let p: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn only_completed_stamps_completion() {
        assert!(ActionStatus::Completed.stamps_completion());
        assert!(!ActionStatus::Pending.stamps_completion());
        assert!(!ActionStatus::InProgress.stamps_completion());
    }

    // -- priority order -------------------------------------------------------

    #[test]
    fn priority_order_is_lexical() {
        assert!(Priority::Medium > Priority::Low);
        assert!(Priority::Low > Priority::High);
        assert!(Priority::High < Priority::Medium);

        let mut all = vec![Priority::High, Priority::Low, Priority::Medium];
        all.sort_by(|a, b| b.cmp(a));
        assert_eq!(all, vec![Priority::Medium, Priority::Low, Priority::High]);
    }

    // -- listing order --------------------------------------------------------

    #[test]
    fn earlier_due_date_sorts_first() {
        let ord = listing_order(
            date("2025-01-01"),
            Priority::High,
            date("2025-02-01"),
            Priority::Medium,
        );
        assert_eq!(ord, Ordering::Less);
    }

    #[test]
    fn undated_items_sort_last() {
        let ord = listing_order(None, Priority::Medium, date("2030-01-01"), Priority::Low);
        assert_eq!(ord, Ordering::Greater);
    }

    #[test]
    fn same_due_date_breaks_tie_by_lexical_priority_desc() {
        let due = date("2025-03-01");
        assert_eq!(
            listing_order(due, Priority::Medium, due, Priority::High),
            Ordering::Less
        );
        assert_eq!(
            listing_order(due, Priority::High, due, Priority::Low),
            Ordering::Greater
        );
        assert_eq!(
            listing_order(None, Priority::Low, None, Priority::Low),
            Ordering::Equal
        );
    }

    // -- filters --------------------------------------------------------------

    #[test]
    fn all_or_absent_filter_means_none() {
        assert_eq!(parse_status_filter(None).unwrap(), None);
        assert_eq!(parse_status_filter(Some("all")).unwrap(), None);
        assert_eq!(parse_priority_filter(Some("all")).unwrap(), None);
        assert_eq!(parse_priority_filter(Some("")).unwrap(), None);
    }

    #[test]
    fn concrete_filter_parses() {
        assert_eq!(
            parse_status_filter(Some("in_progress")).unwrap(),
            Some(ActionStatus::InProgress)
        );
        assert_eq!(
            parse_priority_filter(Some("high")).unwrap(),
            Some(Priority::High)
        );
    }

    #[test]
    fn bad_filter_is_validation_error() {
        assert_matches!(parse_status_filter(Some("archived")), Err(CoreError::Validation(_)));
        assert_matches!(parse_priority_filter(Some("HIGH")), Err(CoreError::Validation(_)));
    }
}
