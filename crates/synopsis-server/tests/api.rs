mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use synopsis_core::SynopsisConfig;
use synopsis_extract::create_backend;
use synopsis_server::{build_router, AppState};

use helpers::{
    get_json, multipart_body, post_json, post_multipart, send, test_app, uploads, ARTICLE,
};

#[tokio::test]
async fn test_health_and_engine() {
    let (app, _state, _dir) = test_app();

    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    let (status, body) = get_json(&app, "/api/engine").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_type"], "extractive");
    assert_eq!(body["max_input_words"], 10_000);
}

#[tokio::test]
async fn test_samples() {
    let (app, _state, _dir) = test_app();
    let (status, body) = get_json(&app, "/api/samples").await;
    assert_eq!(status, StatusCode::OK);
    let samples = body["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 3);
    assert!(samples[0]["title"].is_string());
    assert!(samples[0]["content"].is_string());
}

#[tokio::test]
async fn test_summarize_article() {
    let (app, _state, _dir) = test_app();
    let (status, body) =
        post_json(&app, "/api/summarize", json!({ "text": ARTICLE, "length": "short" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "extracted");
    assert_eq!(body["length"], "short");
    let summary = body["summary"].as_str().unwrap();
    assert!(!summary.is_empty());
    assert!(summary.ends_with('.'));
    assert!(ARTICLE.len() > summary.len());
    assert!(body["metrics"]["compression_ratio"].as_f64().unwrap() > 0.0);
    assert!(body["keywords"].as_array().is_some_and(|k| !k.is_empty()));
    assert!(body["processing_time"].is_string());
}

#[tokio::test]
async fn test_summarize_uses_default_length() {
    let (app, _state, _dir) = test_app();
    let (status, body) = post_json(&app, "/api/summarize", json!({ "text": ARTICLE })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], "medium");
}

#[tokio::test]
async fn test_summarize_rejects_short_text() {
    let (app, _state, _dir) = test_app();
    let (status, body) = post_json(&app, "/api/summarize", json!({ "text": "Too short." })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("too short"));

    let (status, body) = post_json(&app, "/api/summarize", json!({ "text": "   " })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Text cannot be empty");
}

#[tokio::test]
async fn test_summarize_batch() {
    let (app, _state, _dir) = test_app();
    let (status, body) = post_json(
        &app,
        "/api/summarize/batch",
        json!({ "texts": [ARTICLE, "tiny", ""], "length": "short" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["index"], 0);
    assert_eq!(results[0]["outcome"], "extracted");
    assert_eq!(results[1]["outcome"], "too_short");
    assert_eq!(results[1]["summary"], "Text is too short to summarize.");
    assert_eq!(results[2]["outcome"], "empty");
    assert_eq!(results[2]["summary"], "No text provided for summarization.");
}

#[tokio::test]
async fn test_summarize_batch_applies_word_limit() {
    let (app, _state, _dir) = test_app();
    let long = "word ".repeat(10_001);
    let (status, body) = post_json(
        &app,
        "/api/summarize/batch",
        json!({ "texts": [ARTICLE, long] }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("Text 1 is too long"));
}

#[tokio::test]
async fn test_summarize_batch_rejects_empty_list() {
    let (app, _state, _dir) = test_app();
    let (status, body) = post_json(&app, "/api/summarize/batch", json!({ "texts": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No texts provided");
}

fn articles_csv() -> String {
    let mut csv = String::from("id,content\n");
    for i in 0..3 {
        csv.push_str(&format!("{},\"{}\"\n", i, ARTICLE));
    }
    csv.push_str("3,short cell\n");
    csv
}

#[tokio::test]
async fn test_batch_upload_runs_and_downloads() {
    let (app, state, _dir) = test_app();
    let body = multipart_body("articles.csv", &articles_csv(), &[("length", "short")]);
    let (status, body) = post_multipart(&app, "/api/batch", body).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "queued");
    let job_id = body["job_id"].as_str().unwrap().to_string();

    let mut job = serde_json::Value::Null;
    for _ in 0..250 {
        let (status, body) = get_json(&app, &format!("/api/batch/jobs/{}", job_id)).await;
        assert_eq!(status, StatusCode::OK);
        if body["status"] == "completed" || body["status"] == "failed" {
            job = body;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(job["status"], "completed", "job did not complete: {}", job);
    assert_eq!(job["column"], "content");
    assert_eq!(job["text_columns"], json!(["content"]));
    assert_eq!(job["summarized"], 3);
    assert_eq!(job["skipped"], 1);
    assert_eq!(job["rows_total"], 4);
    assert!(uploads(&state).is_empty(), "upload left behind: {:?}", uploads(&state));

    let request = Request::builder()
        .uri(format!("/api/batch/jobs/{}/download", job_id))
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let csv = String::from_utf8(bytes).unwrap();
    assert!(csv.starts_with("content,summary,original_words,summary_words,compression_ratio"));
    assert_eq!(csv.lines().count(), 5);

    let (status, body) = get_json(&app, "/api/batch/jobs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_batch_rejects_unknown_column() {
    let (app, _state, _dir) = test_app();
    let body = multipart_body("articles.csv", &articles_csv(), &[("column", "body")]);
    let (status, body) = post_multipart(&app, "/api/batch", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Available: id, content"));
}

#[tokio::test]
async fn test_batch_rejects_non_csv() {
    let (app, _state, _dir) = test_app();
    let body = multipart_body("notes.txt", "just some notes", &[]);
    let (status, _) = post_multipart(&app, "/api/batch", body).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_unknown_job() {
    let (app, _state, _dir) = test_app();
    let (status, body) = get_json(&app, "/api/batch/jobs/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Job not found");

    let (status, _) = get_json(&app, "/api/batch/jobs/missing/download").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_removed_when_queue_is_down() {
    let dir = tempfile::tempdir().unwrap();
    let config = SynopsisConfig::from_env(dir.path()).unwrap();
    let backend = create_backend(config.limits.max_words);
    let state = Arc::new(AppState::new(config, backend));
    drop(state.take_batch_rx());
    let app = build_router(state.clone());

    let body = multipart_body("articles.csv", &articles_csv(), &[]);
    let (status, body) = post_multipart(&app, "/api/batch", body).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Batch worker unavailable");
    assert!(uploads(&state).is_empty());
    assert!(state.batch_jobs.read().is_empty());
}
