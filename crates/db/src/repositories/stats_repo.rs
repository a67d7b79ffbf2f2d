//! Aggregate counts over all tables.

use actiontrack_core::action_item::{STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING};

use crate::models::stats::StatsSummary;
use crate::DbPool;

/// Read-only aggregate queries.
pub struct StatsRepo;

impl StatsRepo {
    /// Count managers, employees and action items (total and per status).
    pub async fn summary(pool: &DbPool) -> Result<StatsSummary, sqlx::Error> {
        sqlx::query_as::<_, StatsSummary>(
            "SELECT
                (SELECT COUNT(*) FROM managers) AS managers,
                (SELECT COUNT(*) FROM employees) AS employees,
                (SELECT COUNT(*) FROM action_items) AS total_actions,
                (SELECT COUNT(*) FROM action_items WHERE status = ?) AS pending,
                (SELECT COUNT(*) FROM action_items WHERE status = ?) AS in_progress,
                (SELECT COUNT(*) FROM action_items WHERE status = ?) AS completed",
        )
        .bind(STATUS_PENDING)
        .bind(STATUS_IN_PROGRESS)
        .bind(STATUS_COMPLETED)
        .fetch_one(pool)
        .await
    }
}
