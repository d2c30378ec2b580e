//! HTTP route handlers.

pub mod batch;
pub mod health;
pub mod samples;
pub mod summarize;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use synopsis_core::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(samples::routes())
        .merge(summarize::routes())
        .merge(batch::routes())
}

/// `{ "error": message }` with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

/// Map a library error onto an HTTP status.
pub(crate) fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidInput(_) | Error::Csv(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
        Error::UnsupportedFile(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::Io(_) | Error::Config(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
