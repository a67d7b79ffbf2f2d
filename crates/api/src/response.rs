//! Shared response envelope types for API handlers.
//!
//! Read endpoints under `/api/v1` wrap their payload in `{ "data": ... }`.
//! Create endpoints return the created row directly with `201 Created`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
