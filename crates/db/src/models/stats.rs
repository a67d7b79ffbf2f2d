//! Aggregate counts for the dashboard and the stats endpoint.

use serde::Serialize;
use sqlx::FromRow;

/// Row counts across all three tables, with action items broken down by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct StatsSummary {
    pub managers: i64,
    pub employees: i64,
    pub total_actions: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub completed: i64,
}
