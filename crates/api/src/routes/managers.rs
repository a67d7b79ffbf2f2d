use axum::routing::get;
use axum::Router;

use crate::handlers::managers;
use crate::state::AppState;

/// Manager routes mounted at `/managers`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(managers::list).post(managers::create))
        .route("/{id}", get(managers::get_by_id))
}
