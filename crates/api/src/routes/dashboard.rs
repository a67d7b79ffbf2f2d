use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes mounted at `/api/v1/dashboard`.
///
/// ```text
/// GET  /   -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::dashboard))
}

/// Flat stats endpoint mounted at the root, outside `/api/v1`.
///
/// ```text
/// GET  /api/stats   -> stats
/// ```
pub fn stats_router() -> Router<AppState> {
    Router::new().route("/api/stats", get(dashboard::stats))
}
