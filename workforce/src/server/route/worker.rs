use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info, instrument};

use super::super::error::WorkerRouteError;
use super::super::types::{MessageResponse, WorkerEmail, WorkerRouteResult};
use crate::core::config::Config;
use crate::service::worker::WorkerService;
use crate::types::worker::Worker;

/// Unwraps a JSON worker body, logging the decode failure if any.
fn decode_worker(payload: Result<Json<Worker>, JsonRejection>) -> Result<Worker, WorkerRouteError> {
    match payload {
        Ok(Json(worker)) => Ok(worker),
        Err(rejection) => {
            error!(error = %rejection.body_text(), status = %rejection.status(), "Failed to decode worker body");
            Err(WorkerRouteError::InvalidBody(rejection.body_text()))
        }
    }
}

/// Handles `POST /worker/`: validates and stores a new worker.
///
/// # Errors
/// * 400 - the body is not a JSON worker, or the worker is invalid
/// * 500 - the store failed, including when the email is already taken
#[instrument(skip_all)]
async fn handle_create_worker_request(
    State(config): State<Arc<Config>>,
    payload: Result<Json<Worker>, JsonRejection>,
) -> WorkerRouteResult {
    let worker = decode_worker(payload)?;

    match WorkerService::create_worker(worker, &config).await {
        Ok(()) => {
            info!("Worker created successfully");
            Ok(Json(MessageResponse::ok()).into_response())
        }
        Err(e) => {
            error!(error = %e, "Failed to create worker");
            Err(e.into())
        }
    }
}

/// Handles `PUT /worker/`: replaces the worker stored under the body's email.
///
/// # Errors
/// * 400 - the body is not a JSON worker, or the worker is invalid
/// * 404 - no worker is stored under that email
/// * 500 - the store failed
#[instrument(skip_all)]
async fn handle_update_worker_request(
    State(config): State<Arc<Config>>,
    payload: Result<Json<Worker>, JsonRejection>,
) -> WorkerRouteResult {
    let worker = decode_worker(payload)?;

    match WorkerService::update_worker(worker, &config).await {
        Ok(()) => {
            info!("Worker updated successfully");
            Ok(Json(MessageResponse::ok()).into_response())
        }
        Err(e) => {
            error!(error = %e, "Failed to update worker");
            Err(e.into())
        }
    }
}

/// Handles `GET /worker/:email`: returns the stored worker as JSON.
#[instrument(skip_all, fields(email = %email))]
async fn handle_get_worker_request(
    Path(WorkerEmail { email }): Path<WorkerEmail>,
    State(config): State<Arc<Config>>,
) -> WorkerRouteResult {
    match WorkerService::get_worker(&email, &config).await {
        Ok(worker) => Ok(Json(worker).into_response()),
        Err(e) => {
            error!(error = %e, "Failed to read worker");
            Err(e.into())
        }
    }
}

/// Handles `DELETE /worker/:email`. Deleting an unknown email is not an error.
#[instrument(skip_all, fields(email = %email))]
async fn handle_delete_worker_request(
    Path(WorkerEmail { email }): Path<WorkerEmail>,
    State(config): State<Arc<Config>>,
) -> WorkerRouteResult {
    match WorkerService::delete_worker(&email, &config).await {
        Ok(()) => {
            info!("Worker deleted successfully");
            Ok(Json(MessageResponse::ok()).into_response())
        }
        Err(e) => {
            error!(error = %e, "Failed to delete worker");
            Err(e.into())
        }
    }
}

/// Creates the router for worker endpoints.
///
/// `/worker` and `/worker/` are both accepted for create and update.
pub fn worker_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/worker/", post(handle_create_worker_request).put(handle_update_worker_request))
        .route("/worker", post(handle_create_worker_request).put(handle_update_worker_request))
        .route("/worker/:email", get(handle_get_worker_request).delete(handle_delete_worker_request))
        .with_state(config)
}
