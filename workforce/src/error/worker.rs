use axum::http::StatusCode;
use thiserror::Error;

use crate::core::client::database::DatabaseError;
use crate::types::worker::ValidationError;

/// Failure of a worker operation.
///
/// Each variant carries the HTTP status the operation reports, see
/// [`WorkerError::status_code`].
#[derive(Error, Debug)]
pub enum WorkerError {
    /// The record breaks a write invariant
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No worker is stored under this email
    #[error("worker not found: {0}")]
    NotFound(String),

    /// The store could not complete the operation
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl WorkerError {
    /// Status code reported for this failure:
    /// * `Validation` -> 400 Bad Request
    /// * `NotFound` -> 404 Not Found
    /// * `Database` -> 500 Internal Server Error, a duplicate email included
    pub fn status_code(&self) -> StatusCode {
        match self {
            WorkerError::Validation(_) => StatusCode::BAD_REQUEST,
            WorkerError::NotFound(_) => StatusCode::NOT_FOUND,
            WorkerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
