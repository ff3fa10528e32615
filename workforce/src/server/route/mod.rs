use std::any::Any;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use public::local_route;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use worker::worker_router;

use super::types::ErrorResponse;
use crate::core::config::Config;

pub(super) mod public;
pub(super) mod worker;

/// Fallback for requests matching no route: 404 with a JSON error body.
pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("The requested resource was not found")))
}

/// Turns a panic raised while handling a request into a 500 response.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic payload"
    };
    error!(panic = %details, "Request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new("internal server error"))).into_response()
}

pub(crate) fn server_router(config: Arc<Config>) -> Router {
    Router::new()
        .merge(local_route())
        .merge(worker_router(config))
        .fallback(handler_404)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
