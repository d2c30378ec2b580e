//! Single and multi-text summarization routes.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use synopsis_core::config::MAX_BATCH_ROWS;
use synopsis_core::LengthTier;
use synopsis_extract::keywords::extract_keywords;
use synopsis_extract::pipeline::clean_text;
use synopsis_extract::{format_duration, summarize_many, validate_text, Outcome, SummaryMetrics};
use tracing::{debug, error};

use super::error_response;
use crate::state::AppState;

/// Keywords returned alongside a single summary.
const MAX_KEYWORDS: usize = 8;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/summarize", post(summarize))
        .route("/summarize/batch", post(summarize_batch))
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub length: Option<LengthTier>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub outcome: Outcome,
    pub length: LengthTier,
    pub metrics: SummaryMetrics,
    pub keywords: Vec<String>,
    pub processing_time: String,
}

/// POST /api/summarize
async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeRequest>,
) -> Response {
    let validation = validate_text(&req.text, &state.config.limits);
    if !validation.valid {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, validation.message);
    }

    let tier = req.length.unwrap_or(state.config.default_length);
    let start = Instant::now();
    let summary = state.backend.summarize_detailed(&req.text, tier);
    let original = clean_text(&req.text);
    let metrics = SummaryMetrics::compute(&original, &summary.text);
    let keywords = extract_keywords(&original, MAX_KEYWORDS);
    let elapsed = start.elapsed();

    debug!(
        tier = %tier,
        outcome = ?summary.outcome,
        compression = metrics.compression_ratio,
        "Summarized text"
    );

    Json(SummarizeResponse {
        summary: summary.text,
        outcome: summary.outcome,
        length: tier,
        metrics,
        keywords,
        processing_time: format_duration(elapsed),
    })
    .into_response()
}

#[derive(Debug, Deserialize)]
pub struct BatchSummarizeRequest {
    pub texts: Vec<String>,
    #[serde(default)]
    pub length: Option<LengthTier>,
}

#[derive(Debug, Serialize)]
pub struct BatchItem {
    pub index: usize,
    pub summary: String,
    pub outcome: Outcome,
    pub metrics: SummaryMetrics,
}

/// POST /api/summarize/batch: summarize several texts in one call.
async fn summarize_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchSummarizeRequest>,
) -> Response {
    if req.texts.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No texts provided");
    }
    if req.texts.len() > MAX_BATCH_ROWS {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("At most {} texts per request", MAX_BATCH_ROWS),
        );
    }

    let max_words = state.config.limits.max_words;
    if let Some(index) = req
        .texts
        .iter()
        .position(|t| t.split_whitespace().count() > max_words)
    {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!(
                "Text {} is too long. Please provide less than {} words.",
                index, max_words
            ),
        );
    }

    let tier = req.length.unwrap_or(state.config.default_length);
    let worker_state = state.clone();
    let texts = req.texts;
    let result = tokio::task::spawn_blocking(move || {
        let summaries = summarize_many(&texts, tier, worker_state.backend.as_ref());
        texts
            .iter()
            .zip(summaries)
            .enumerate()
            .map(|(index, (text, summary))| BatchItem {
                index,
                metrics: SummaryMetrics::compute(&clean_text(text), &summary.text),
                summary: summary.text,
                outcome: summary.outcome,
            })
            .collect::<Vec<_>>()
    })
    .await;

    match result {
        Ok(results) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "results": results,
                "total": results.len(),
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Batch summarization task failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Summarization failed")
        }
    }
}
