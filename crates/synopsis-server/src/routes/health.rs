//! Liveness and engine info.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use synopsis_extract::EngineInfo;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/engine", get(get_engine))
}

/// GET /api/health
async fn get_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let status = if state.backend.is_available() {
        "healthy"
    } else {
        "degraded"
    };
    Json(serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/engine: the active summarization backend.
async fn get_engine(State(state): State<Arc<AppState>>) -> Json<EngineInfo> {
    Json(state.backend.info())
}
