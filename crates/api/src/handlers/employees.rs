//! Handlers for the `/employees` resource.

use actiontrack_core::error::CoreError;
use actiontrack_core::types::DbId;
use actiontrack_db::models::action_item::ActionItemWithNames;
use actiontrack_db::models::employee::{
    CreateEmployee, Employee, EmployeeWithCounts, ReassignEmployee,
};
use actiontrack_db::repositories::{ActionItemRepo, EmployeeRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// An employee with their manager's name and their action items.
#[derive(Debug, Serialize)]
pub struct EmployeeDetail {
    pub employee: EmployeeWithCounts,
    pub action_items: Vec<ActionItemWithNames>,
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    input.validate()?;
    let employee = EmployeeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        employee_id = employee.id,
        manager_id = employee.manager_id,
        "Employee created"
    );

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/employees
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<EmployeeWithCounts>>>> {
    let employees = EmployeeRepo::list_with_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: employees }))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EmployeeDetail>>> {
    let employee = EmployeeRepo::find_with_counts(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    let action_items = ActionItemRepo::list_for_employee(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: EmployeeDetail {
            employee,
            action_items,
        },
    }))
}

/// PUT /api/v1/employees/{id}/manager
///
/// Move the employee under another manager. Existing action items keep
/// the manager they were created under.
pub async fn reassign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<ReassignEmployee>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::reassign(&state.pool, id, input.manager_id).await?;

    tracing::info!(employee_id = id, manager_id = input.manager_id, "Employee reassigned");

    Ok(Json(employee))
}
