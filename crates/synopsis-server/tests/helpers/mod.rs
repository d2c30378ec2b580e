use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use synopsis_core::SynopsisConfig;
use synopsis_extract::create_backend;
use synopsis_server::{batch, build_router, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

pub const ARTICLE: &str = "Climate change is causing significant environmental changes worldwide. \
    Rising temperatures are melting polar ice caps and glaciers at unprecedented rates. \
    Sea levels are rising, threatening coastal communities and ecosystems. \
    Extreme weather events like hurricanes, droughts, and floods are becoming more frequent. \
    Scientists warn that without immediate action these effects will worsen.";

pub const BOUNDARY: &str = "synopsis-test-boundary";

/// Router backed by a throwaway data directory, with the batch worker running.
pub fn test_app() -> (Router, Arc<AppState>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = SynopsisConfig::from_env(dir.path()).unwrap();
    let backend = create_backend(config.limits.max_words);
    let state = Arc::new(AppState::new(config, backend));
    batch::start_batch_worker(state.clone());
    (build_router(state.clone()), state, dir)
}

/// File names currently in the uploads directory.
pub fn uploads(state: &AppState) -> Vec<String> {
    std::fs::read_dir(&state.config.data_paths.uploads)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Multipart body with a `file` part plus plain text fields.
pub fn multipart_body(filename: &str, file: &str, fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: text/csv\r\n\r\n{file}\r\n--{BOUNDARY}--\r\n"
    ));
    body
}

pub async fn post_multipart(app: &Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
