use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use rstest::fixture;
use tower::ServiceExt;

use crate::core::client::database::repository::worker::InMemoryWorkerRepository;
use crate::core::client::WorkerRepository;
use crate::core::config::Config;
use crate::types::params::ServerParams;
use crate::types::worker::Worker;

pub fn build_employee(email: &str) -> Worker {
    Worker {
        email: email.to_string(),
        name: "john employee smith".to_string(),
        is_contractor: false,
        contract_end: None,
        job_title: Some("seo admin".to_string()),
        tags: vec!["copywriting".to_string(), "seo".to_string()],
    }
}

pub fn build_contractor(email: &str) -> Worker {
    Worker {
        email: email.to_string(),
        name: "john contractor smith".to_string(),
        is_contractor: true,
        contract_end: Some("2050-11-30T15:04:05Z".to_string()),
        job_title: None,
        tags: vec!["mongodb".to_string(), "mysql".to_string(), "aws".to_string()],
    }
}

/// Loopback on an OS-assigned port, so parallel tests never collide.
pub fn test_server_params() -> ServerParams {
    ServerParams { host: "127.0.0.1".to_string(), port: 0 }
}

pub fn build_test_config(database: Arc<dyn WorkerRepository>) -> Arc<Config> {
    Arc::new(Config::new(test_server_params(), database))
}

#[fixture]
pub fn in_memory_config() -> Arc<Config> {
    build_test_config(Arc::new(InMemoryWorkerRepository::new()))
}

pub fn json_request(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("Failed to build request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).expect("Failed to build request")
}

/// Drives one request through the router in-process.
pub async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.oneshot(request).await.expect("Router is infallible");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body");
    (status, body)
}
