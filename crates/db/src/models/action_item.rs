//! Action item entity model and DTOs.

use actiontrack_core::action_item::{ActionStatus, Priority};
use actiontrack_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An action item row from the `action_items` table.
///
/// `manager_id` is the employee's manager at the time the item was created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub employee_id: DbId,
    pub manager_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: ActionStatus,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    pub due_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// An action item joined with the assignee's and the stored manager's names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionItemWithNames {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: ActionItem,
    pub employee_name: String,
    pub manager_name: String,
}

/// DTO for creating a new action item. Priority defaults to `medium`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActionItem {
    #[validate(length(min = 1, max = 500, message = "title is required"))]
    pub title: String,
    pub employee_id: DbId,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Date>,
}

/// DTO for a status transition.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActionItemStatus {
    pub status: ActionStatus,
}

/// Optional equality filters for action item listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionItemFilter {
    pub status: Option<ActionStatus>,
    pub priority: Option<Priority>,
}
