pub mod action_items;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod managers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard                                       summary + recent action items
///
/// /managers                                        list, create
/// /managers/{id}                                   detail (team + action items)
///
/// /employees                                       list, create
/// /employees/{id}                                  detail (action items)
/// /employees/{id}/manager                          reassign (PUT)
///
/// /action-items                                    list (?status=&priority=), create
/// /action-items/{id}                               get, delete
/// /action-items/{id}/status                        update status (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dashboard", dashboard::router())
        .nest("/managers", managers::router())
        .nest("/employees", employees::router())
        .nest("/action-items", action_items::router())
}
