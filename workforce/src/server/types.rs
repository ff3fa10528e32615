use axum::response::Response;
use serde::{Deserialize, Serialize};

use super::error::WorkerRouteError;

/// Email path parameter of `/worker/:email`.
#[derive(Deserialize)]
pub struct WorkerEmail {
    pub email: String,
}

/// Body of a successful write: `{"message": "OK"}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn ok() -> Self {
        Self { message: "OK".to_string() }
    }
}

/// Body of a failed operation: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Result type of the worker route handlers.
pub type WorkerRouteResult = Result<Response<axum::body::Body>, WorkerRouteError>;
