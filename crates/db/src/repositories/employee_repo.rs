//! Repository for the `employees` table.

use actiontrack_core::types::DbId;

use crate::error::StoreError;
use crate::models::employee::{CreateEmployee, Employee, EmployeeWithCounts};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, manager_id, position, created_at";

/// Select list joining the manager name and counting action items.
///
/// Callers append an optional `WHERE` clause followed by [`GROUP_AND_ORDER`].
const WITH_COUNTS: &str = "SELECT e.id, e.name, e.email, e.manager_id, e.position, e.created_at,
        m.name AS manager_name, COUNT(ai.id) AS action_count
     FROM employees e
     JOIN managers m ON e.manager_id = m.id
     LEFT JOIN action_items ai ON ai.employee_id = e.id";

const GROUP_AND_ORDER: &str = "GROUP BY e.id ORDER BY e.name, e.id";

/// Provides insert, lookup and reassignment operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee under an existing manager.
    ///
    /// The manager is checked inside the insert itself; an unknown
    /// `manager_id` inserts nothing and yields [`StoreError::NotFound`].
    pub async fn create(pool: &DbPool, input: &CreateEmployee) -> Result<Employee, StoreError> {
        let query = format!(
            "INSERT INTO employees (name, email, manager_id, position)
             SELECT ?, ?, m.id, ? FROM managers m WHERE m.id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.position)
            .bind(input.manager_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| StoreError::from_email_insert(e, "Employee", &input.email))?
            .ok_or(StoreError::NotFound {
                entity: "Manager",
                id: input.manager_id,
            })
    }

    /// Find a plain employee row by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = ?");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employee by ID together with their manager's name and action count.
    pub async fn find_with_counts(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<EmployeeWithCounts>, sqlx::Error> {
        let query = format!("{WITH_COUNTS} WHERE e.id = ? {GROUP_AND_ORDER}");
        sqlx::query_as::<_, EmployeeWithCounts>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every employee by name with manager name and action count.
    pub async fn list_with_counts(pool: &DbPool) -> Result<Vec<EmployeeWithCounts>, sqlx::Error> {
        let query = format!("{WITH_COUNTS} {GROUP_AND_ORDER}");
        sqlx::query_as::<_, EmployeeWithCounts>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the employees currently reporting to a manager.
    pub async fn list_for_manager(
        pool: &DbPool,
        manager_id: DbId,
    ) -> Result<Vec<EmployeeWithCounts>, sqlx::Error> {
        let query = format!("{WITH_COUNTS} WHERE e.manager_id = ? {GROUP_AND_ORDER}");
        sqlx::query_as::<_, EmployeeWithCounts>(&query)
            .bind(manager_id)
            .fetch_all(pool)
            .await
    }

    /// Move an employee under a different manager.
    ///
    /// Existing action items keep the `manager_id` they were created with.
    /// Fails with [`StoreError::NotFound`] naming whichever side is missing.
    pub async fn reassign(
        pool: &DbPool,
        employee_id: DbId,
        manager_id: DbId,
    ) -> Result<Employee, StoreError> {
        let query = format!(
            "UPDATE employees SET manager_id = ?
             WHERE id = ? AND EXISTS (SELECT 1 FROM managers WHERE managers.id = ?)
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Employee>(&query)
            .bind(manager_id)
            .bind(employee_id)
            .bind(manager_id)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(employee) => Ok(employee),
            None if Self::find_by_id(pool, employee_id).await?.is_none() => {
                Err(StoreError::NotFound {
                    entity: "Employee",
                    id: employee_id,
                })
            }
            None => Err(StoreError::NotFound {
                entity: "Manager",
                id: manager_id,
            }),
        }
    }
}
