//! Handlers for the `/managers` resource.

use actiontrack_core::error::CoreError;
use actiontrack_core::types::DbId;
use actiontrack_db::models::action_item::ActionItemWithNames;
use actiontrack_db::models::employee::EmployeeWithCounts;
use actiontrack_db::models::manager::{CreateManager, Manager, ManagerWithCount};
use actiontrack_db::repositories::{ActionItemRepo, EmployeeRepo, ManagerRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// A manager with their team and the action items recorded against them.
#[derive(Debug, Serialize)]
pub struct ManagerDetail {
    pub manager: Manager,
    pub employees: Vec<EmployeeWithCounts>,
    pub action_items: Vec<ActionItemWithNames>,
}

/// POST /api/v1/managers
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateManager>,
) -> AppResult<(StatusCode, Json<Manager>)> {
    input.validate()?;
    let manager = ManagerRepo::create(&state.pool, &input).await?;

    tracing::info!(manager_id = manager.id, "Manager created");

    Ok((StatusCode::CREATED, Json(manager)))
}

/// GET /api/v1/managers
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ManagerWithCount>>>> {
    let managers = ManagerRepo::list_with_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: managers }))
}

/// GET /api/v1/managers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ManagerDetail>>> {
    let manager = ManagerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Manager",
            id,
        }))?;

    let employees = EmployeeRepo::list_for_manager(&state.pool, id).await?;
    let action_items = ActionItemRepo::list_for_manager(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: ManagerDetail {
            manager,
            employees,
            action_items,
        },
    }))
}
