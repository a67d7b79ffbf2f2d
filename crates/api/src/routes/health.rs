use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// `database` value when the store file is present (or the store is in memory).
pub const DATABASE_CONNECTED: &str = "connected";
/// `database` value when the store file does not exist.
pub const DATABASE_NOT_INITIALIZED: &str = "not_initialized";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Server time of the check.
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Whether the backing store file exists.
    pub database: &'static str,
    /// Whether the store answers a trivial query.
    pub db_healthy: bool,
}

/// GET /health -- returns process health and store status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let file_exists = actiontrack_db::database_file_path(&state.config.database_url)
        .map_or(true, |path| path.exists());
    let db_healthy = actiontrack_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };
    let database = if file_exists {
        DATABASE_CONNECTED
    } else {
        DATABASE_NOT_INITIALIZED
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now(),
        database,
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
