use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ErrorResponse;
use crate::error::WorkerError;

/// Errors raised while handling a worker route.
///
/// # Status Code Mapping
/// * `InvalidBody` -> 400 Bad Request, plain text, the body is not echoed
/// * `Worker` -> the status of the underlying [`WorkerError`], JSON `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum WorkerRouteError {
    /// The request body is not a JSON worker
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Worker(#[from] WorkerError),
}

impl IntoResponse for WorkerRouteError {
    fn into_response(self) -> Response {
        match self {
            WorkerRouteError::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, StatusCode::BAD_REQUEST.canonical_reason().unwrap_or_default())
                    .into_response()
            }
            WorkerRouteError::Worker(e) => (e.status_code(), Json(ErrorResponse::new(e.to_string()))).into_response(),
        }
    }
}
