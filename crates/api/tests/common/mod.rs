//! Shared helpers for integration tests.
//!
//! `build_test_app` mirrors the production router construction so tests
//! exercise the same middleware stack (CORS, request ID, timeout, panic
//! recovery, body limit) that `main.rs` uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use palmlens_api::config::ServerConfig;
use palmlens_api::router::build_app_router;
use palmlens_api::state::AppState;
use palmlens_api::uploads::UploadStore;
use palmlens_storage::memory::MemStorage;

/// Valid PNG magic bytes; `image::guess_format` recognizes these without
/// needing a full decodable file.
pub const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: std::path::PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir,
    }
}

/// Build the full application router backed by a fresh in-memory store
/// and a temporary upload directory.
///
/// The returned `TempDir` must be kept alive for the duration of the
/// test; dropping it deletes the upload directory.
pub fn build_test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp upload dir");
    let config = test_config(dir.path().to_path_buf());

    let state = AppState {
        storage: Arc::new(MemStorage::new()),
        config: Arc::new(config.clone()),
        uploads: Arc::new(UploadStore::new(dir.path())),
    };

    (build_app_router(state, &config), dir)
}

/// Fake PNG payload of the given total length (magic bytes + padding).
pub fn png_bytes(len: usize) -> Vec<u8> {
    let mut bytes = PNG_MAGIC.to_vec();
    bytes.resize(len.max(PNG_MAGIC.len()), 0);
    bytes
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart request building
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "palmlens-test-boundary";

/// Minimal multipart/form-data body builder for upload tests.
pub struct MultipartBuilder {
    buf: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(bytes);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    fn build(mut self) -> (String, Vec<u8>) {
        self.buf
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={BOUNDARY}"),
            self.buf,
        )
    }
}

pub async fn post_multipart(app: &Router, uri: &str, builder: MultipartBuilder) -> Response {
    let (content_type, body) = builder.build();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}
