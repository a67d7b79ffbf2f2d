//! Manager entity model and DTOs.

use actiontrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A manager row from the `managers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Manager {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// A manager together with the size of their team.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ManagerWithCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub manager: Manager,
    pub employee_count: i64,
}

/// DTO for creating a new manager.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateManager {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}
