use axum::routing::{get, put};
use axum::Router;

use crate::handlers::action_items;
use crate::state::AppState;

/// Action item routes mounted at `/action-items`.
///
/// ```text
/// GET    /               -> list (?status=&priority=, `all` disables a filter)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete
/// PUT    /{id}/status    -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(action_items::list).post(action_items::create))
        .route(
            "/{id}",
            get(action_items::get_by_id).delete(action_items::delete),
        )
        .route("/{id}/status", put(action_items::update_status))
}
