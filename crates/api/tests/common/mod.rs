//! Shared harness for API integration tests.
//!
//! Builds the application through [`build_app_router`] so tests exercise the
//! exact middleware stack (CORS, request ID, timeout, body limit, panic
//! recovery) that production uses.

#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use formbuilder_api::config::ServerConfig;
use formbuilder_api::router::build_app_router;
use formbuilder_api::state::AppState;
use formbuilder_storage::{ImageStore, StorageConfig};

/// Build a test `ServerConfig` with safe defaults.
///
/// The storage provider points at a local port nothing listens on, so any
/// test that reaches the provider observes a transport failure instead of
/// calling out to the network.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: 5 * 1024 * 1024,
        storage: StorageConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            cloud_name: "test".to_string(),
            upload_preset: "unsigned".to_string(),
            folder: "form-builder".to_string(),
            timeout_secs: 2,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with(pool, test_config())
}

/// Like [`build_test_app`], but with the storage provider pointed at the
/// given base URL (a local stub in practice).
pub fn build_test_app_with_storage(pool: PgPool, base_url: String) -> Router {
    let mut config = test_config();
    config.storage.base_url = base_url;
    build_app_with(pool, config)
}

fn build_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let images = ImageStore::new(&config.storage).expect("storage client");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        images: Arc::new(images),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a request with a JSON body.
pub async fn send_json(
    app: Router,
    method: Method,
    path: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, path, body).await
}

pub async fn put_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, path, body).await
}

pub async fn delete(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Create a form through the API and return its JSON representation.
pub async fn create_form(app: Router, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(app, "/api/forms", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

/// A minimal multipart/form-data body with a single file field.
pub fn multipart_file_body(boundary: &str, field: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

/// A multipart body containing a single text field (no file).
pub fn multipart_text_body(boundary: &str, field: &str, value: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n").as_bytes(),
    );
    body.extend_from_slice(value.as_bytes());
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}
