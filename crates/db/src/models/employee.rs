//! Employee entity model and DTOs.

use actiontrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub manager_id: DbId,
    pub position: Option<String>,
    pub created_at: Timestamp,
}

/// An employee joined with their manager's name and their action item count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeWithCounts {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub employee: Employee,
    pub manager_name: String,
    pub action_count: i64,
}

/// DTO for creating a new employee.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub manager_id: DbId,
    #[validate(length(max = 200))]
    pub position: Option<String>,
}

/// DTO for moving an employee under a different manager.
#[derive(Debug, Clone, Deserialize)]
pub struct ReassignEmployee {
    pub manager_id: DbId,
}
