//! Repository for the `managers` table.

use actiontrack_core::types::DbId;

use crate::error::StoreError;
use crate::models::manager::{CreateManager, Manager, ManagerWithCount};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, created_at";

/// Provides insert and lookup operations for managers.
pub struct ManagerRepo;

impl ManagerRepo {
    /// Insert a new manager, returning the created row.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if another manager already
    /// uses the email. Nothing is written in that case.
    pub async fn create(pool: &DbPool, input: &CreateManager) -> Result<Manager, StoreError> {
        let query = format!(
            "INSERT INTO managers (name, email)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Manager>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
            .map_err(|e| StoreError::from_email_insert(e, "Manager", &input.email))
    }

    /// Find a manager by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Manager>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM managers WHERE id = ?");
        sqlx::query_as::<_, Manager>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all managers by name, each with the number of employees reporting to them.
    pub async fn list_with_counts(pool: &DbPool) -> Result<Vec<ManagerWithCount>, sqlx::Error> {
        sqlx::query_as::<_, ManagerWithCount>(
            "SELECT m.id, m.name, m.email, m.created_at, COUNT(e.id) AS employee_count
             FROM managers m
             LEFT JOIN employees e ON e.manager_id = m.id
             GROUP BY m.id
             ORDER BY m.name, m.id",
        )
        .fetch_all(pool)
        .await
    }
}
