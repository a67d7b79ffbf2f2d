//! Repository for the `action_items` table.

use actiontrack_core::action_item::ActionStatus;
use actiontrack_core::types::DbId;

use crate::error::StoreError;
use crate::models::action_item::{
    ActionItem, ActionItemFilter, ActionItemWithNames, CreateActionItem,
};
use crate::repositories::NOW_SQL;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, employee_id, manager_id, status, priority, \
                       due_date, created_at, updated_at, completed_at";

/// Select list joining the assignee's and the stored manager's names.
const WITH_NAMES: &str = "SELECT ai.id, ai.title, ai.description, ai.employee_id, ai.manager_id,
        ai.status, ai.priority, ai.due_date, ai.created_at, ai.updated_at, ai.completed_at,
        e.name AS employee_name, m.name AS manager_name
     FROM action_items ai
     JOIN employees e ON ai.employee_id = e.id
     JOIN managers m ON ai.manager_id = m.id";

/// Listing order: due date ascending with undated items last, then priority
/// descending as plain text (`medium`, `low`, `high`). Must stay in step with
/// `actiontrack_core::action_item::listing_order`.
///
/// SQLite sorts NULL first on its own; the `due_date IS NULL` key is what
/// keeps undated items last.
const LISTING_ORDER: &str = "ORDER BY ai.due_date IS NULL, ai.due_date, ai.priority DESC, ai.id";

/// Provides CRUD operations for action items.
pub struct ActionItemRepo;

impl ActionItemRepo {
    /// Insert a new action item for an existing employee.
    ///
    /// `manager_id` is copied from the employee row by the insert itself.
    /// An unknown `employee_id` inserts nothing and yields
    /// [`StoreError::NotFound`].
    pub async fn create(pool: &DbPool, input: &CreateActionItem) -> Result<ActionItem, StoreError> {
        let query = format!(
            "INSERT INTO action_items (title, description, employee_id, manager_id, priority, due_date)
             SELECT ?, ?, e.id, e.manager_id, ?, ? FROM employees e WHERE e.id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActionItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority.unwrap_or_default().as_str())
            .bind(input.due_date)
            .bind(input.employee_id)
            .fetch_optional(pool)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "Employee",
                id: input.employee_id,
            })
    }

    /// Find an action item by ID with employee and manager names.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ActionItemWithNames>, sqlx::Error> {
        let query = format!("{WITH_NAMES} WHERE ai.id = ?");
        sqlx::query_as::<_, ActionItemWithNames>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List action items in listing order, optionally filtered by exact
    /// status and/or priority.
    pub async fn list(
        pool: &DbPool,
        filter: &ActionItemFilter,
    ) -> Result<Vec<ActionItemWithNames>, sqlx::Error> {
        let status = filter.status.map(|s| s.as_str());
        let priority = filter.priority.map(|p| p.as_str());

        let query = format!(
            "{WITH_NAMES}
             WHERE (? IS NULL OR ai.status = ?)
               AND (? IS NULL OR ai.priority = ?)
             {LISTING_ORDER}"
        );
        sqlx::query_as::<_, ActionItemWithNames>(&query)
            .bind(status)
            .bind(status)
            .bind(priority)
            .bind(priority)
            .fetch_all(pool)
            .await
    }

    /// List the action items whose stored `manager_id` is the given manager.
    pub async fn list_for_manager(
        pool: &DbPool,
        manager_id: DbId,
    ) -> Result<Vec<ActionItemWithNames>, sqlx::Error> {
        let query = format!("{WITH_NAMES} WHERE ai.manager_id = ? {LISTING_ORDER}");
        sqlx::query_as::<_, ActionItemWithNames>(&query)
            .bind(manager_id)
            .fetch_all(pool)
            .await
    }

    /// List the action items assigned to an employee.
    pub async fn list_for_employee(
        pool: &DbPool,
        employee_id: DbId,
    ) -> Result<Vec<ActionItemWithNames>, sqlx::Error> {
        let query = format!("{WITH_NAMES} WHERE ai.employee_id = ? {LISTING_ORDER}");
        sqlx::query_as::<_, ActionItemWithNames>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// The most recently created action items, newest first.
    pub async fn list_recent(
        pool: &DbPool,
        limit: i64,
    ) -> Result<Vec<ActionItemWithNames>, sqlx::Error> {
        let query = format!("{WITH_NAMES} ORDER BY ai.created_at DESC, ai.id DESC LIMIT ?");
        sqlx::query_as::<_, ActionItemWithNames>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Set an action item's status.
    ///
    /// Always refreshes `updated_at`. Moving to `completed` stamps
    /// `completed_at`; other statuses leave it as it was. Returns `None`
    /// without touching anything if no row with `id` exists.
    pub async fn update_status(
        pool: &DbPool,
        id: DbId,
        status: ActionStatus,
    ) -> Result<Option<ActionItem>, sqlx::Error> {
        let query = format!(
            "UPDATE action_items SET
                status = ?,
                updated_at = {NOW_SQL},
                completed_at = CASE WHEN ? THEN {NOW_SQL} ELSE completed_at END
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActionItem>(&query)
            .bind(status.as_str())
            .bind(status.stamps_completion())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an action item. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM action_items WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
