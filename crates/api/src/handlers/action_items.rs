//! Handlers for the `/action-items` resource.

use actiontrack_core::error::CoreError;
use actiontrack_core::types::DbId;
use actiontrack_db::models::action_item::{
    ActionItem, ActionItemWithNames, CreateActionItem, UpdateActionItemStatus,
};
use actiontrack_db::repositories::ActionItemRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::ActionItemListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ActionItem",
        id,
    })
}

/// POST /api/v1/action-items
///
/// The stored `manager_id` is the employee's manager at this moment.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateActionItem>,
) -> AppResult<(StatusCode, Json<ActionItem>)> {
    input.validate()?;
    let item = ActionItemRepo::create(&state.pool, &input).await?;

    tracing::info!(
        action_item_id = item.id,
        employee_id = item.employee_id,
        manager_id = item.manager_id,
        priority = %item.priority,
        "Action item created"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/action-items?status=&priority=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActionItemListParams>,
) -> AppResult<Json<DataResponse<Vec<ActionItemWithNames>>>> {
    let filter = params.to_filter()?;
    let items = ActionItemRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/action-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ActionItemWithNames>>> {
    let item = ActionItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/action-items/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateActionItemStatus>,
) -> AppResult<Json<ActionItem>> {
    let item = ActionItemRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(action_item_id = id, status = %item.status, "Action item status updated");

    Ok(Json(item))
}

/// DELETE /api/v1/action-items/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ActionItemRepo::delete(&state.pool, id).await? {
        tracing::info!(action_item_id = id, "Action item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
