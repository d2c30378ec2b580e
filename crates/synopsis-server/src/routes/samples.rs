use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use synopsis_extract::samples::SAMPLE_ARTICLES;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/samples", get(get_samples))
}

/// GET /api/samples: built-in demo articles.
async fn get_samples() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "samples": SAMPLE_ARTICLES }))
}
