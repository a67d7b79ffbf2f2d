//! Handlers for the dashboard summary and the flat stats endpoint.

use actiontrack_db::models::action_item::ActionItemWithNames;
use actiontrack_db::models::stats::StatsSummary;
use actiontrack_db::repositories::{ActionItemRepo, StatsRepo};
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of recently created action items shown on the dashboard.
pub const RECENT_ACTIONS_LIMIT: i64 = 10;

/// Headline numbers shown at the top of the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_managers: i64,
    pub total_employees: i64,
    pub total_actions: i64,
    pub pending_actions: i64,
    pub completed_actions: i64,
}

impl From<StatsSummary> for DashboardStats {
    fn from(s: StatsSummary) -> Self {
        Self {
            total_managers: s.managers,
            total_employees: s.employees,
            total_actions: s.total_actions,
            pending_actions: s.pending,
            completed_actions: s.completed,
        }
    }
}

/// Dashboard payload: headline numbers plus the newest action items.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_actions: Vec<ActionItemWithNames>,
}

/// GET /api/v1/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DataResponse<Dashboard>>> {
    let summary = StatsRepo::summary(&state.pool).await?;
    let recent_actions = ActionItemRepo::list_recent(&state.pool, RECENT_ACTIONS_LIMIT).await?;

    Ok(Json(DataResponse {
        data: Dashboard {
            stats: summary.into(),
            recent_actions,
        },
    }))
}

/// GET /api/stats
///
/// Flat key/value counts, no envelope.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<StatsSummary>> {
    let summary = StatsRepo::summary(&state.pool).await?;
    Ok(Json(summary))
}
