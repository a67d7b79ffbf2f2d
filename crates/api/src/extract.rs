//! Request extractors that report failures as [`AppError`] JSON bodies.

use actiontrack_core::error::CoreError;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body extractor.
///
/// Same as [`axum::Json`], but a rejected body becomes an [`AppError`]
/// instead of axum's plain-text response. A well-formed body whose fields
/// do not fit the target type (for example an unknown `status` value) is a
/// validation error; anything else about the body is a bad request.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Core(CoreError::Validation(err.body_text()))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}
