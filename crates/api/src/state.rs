use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Store handle. Each repository call checks out one connection.
    pub pool: actiontrack_db::DbPool,
    /// Server configuration (the health check reads the database URL).
    pub config: Arc<ServerConfig>,
}
