//! CSV batch routes: upload, job status and result download.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use synopsis_core::{LengthTier, Result};
use synopsis_extract::file::FileType;
use synopsis_extract::Table;
use tracing::{error, info};

use super::{error_response, status_for};
use crate::state::{
    now_millis, remove_upload, AppState, BatchJob, BatchRequest, BatchStatus,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/batch", post(upload_batch))
        .route("/batch/jobs", get(get_batch_jobs))
        .route("/batch/jobs/{job_id}", get(get_batch_job))
        .route("/batch/jobs/{job_id}/download", get(download_batch_job))
}

/// Fields collected from a batch upload form.
#[derive(Default)]
struct UploadForm {
    filename: Option<String>,
    bytes: Vec<u8>,
    column: Option<String>,
    length: Option<String>,
    max_rows: Option<String>,
}

async fn read_form(multipart: &mut Multipart) -> std::result::Result<UploadForm, String> {
    let mut form = UploadForm::default();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(format!("Malformed upload: {}", e)),
        };
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            form.filename = Some(field.file_name().unwrap_or("upload.csv").to_string());
            form.bytes = field
                .bytes()
                .await
                .map_err(|e| format!("Failed to read file: {}", e))?
                .to_vec();
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|e| format!("Failed to read field '{}': {}", name, e))?;
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        match name.as_str() {
            "column" => form.column = Some(value),
            "length" => form.length = Some(value),
            "max_rows" => form.max_rows = Some(value),
            _ => {}
        }
    }
    Ok(form)
}

/// POST /api/batch: queue summarization of one CSV column (multipart).
async fn upload_batch(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, msg),
    };

    let Some(filename) = form.filename else {
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };
    if FileType::from_path(std::path::Path::new(&filename)) != FileType::Csv {
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Please upload a CSV file",
        );
    }

    let tier = match form.length.as_deref().map(str::parse::<LengthTier>) {
        None => state.config.default_length,
        Some(Ok(tier)) => tier,
        Some(Err(e)) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let max_rows = match form.max_rows.as_deref().map(str::parse::<usize>) {
        None => state.config.batch.default_rows,
        Some(Ok(rows)) if rows > 0 => rows.min(state.config.batch.max_rows),
        Some(_) => {
            return error_response(StatusCode::BAD_REQUEST, "max_rows must be a positive integer")
        }
    };

    let table = match Table::from_bytes(&form.bytes) {
        Ok(table) => table,
        Err(e) => return error_response(status_for(&e), e.to_string()),
    };
    if table.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "CSV has no data rows");
    }

    let text_columns = table.text_columns();
    let column = match form.column {
        Some(column) if table.column_index(&column).is_some() => column,
        Some(column) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!(
                    "Column '{}' not found. Available: {}",
                    column,
                    table.headers.join(", ")
                ),
            )
        }
        None => match text_columns.first() {
            Some(column) => column.clone(),
            None => return error_response(StatusCode::BAD_REQUEST, "CSV has no columns"),
        },
    };

    let job_id = uuid::Uuid::new_v4().to_string();
    let file_path = match save_upload(&state, &job_id, &form.bytes) {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to store upload {}: {}", filename, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store upload");
        }
    };

    let job = BatchJob {
        id: job_id.clone(),
        filename: filename.clone(),
        column,
        tier,
        max_rows,
        status: BatchStatus::Queued,
        text_columns,
        rows_total: table.len(),
        summarized: None,
        skipped: None,
        success_rate: None,
        error: None,
        upload_path: Some(file_path.clone()),
        export_path: None,
        queued_at: now_millis(),
        started_at: None,
        completed_at: None,
    };
    state.batch_jobs.write().insert(job_id.clone(), job);

    let request = BatchRequest {
        job_id: job_id.clone(),
        file_path: file_path.clone(),
    };
    if state.batch_tx.send(request).is_err() {
        error!("Batch worker is not running");
        state.batch_jobs.write().remove(&job_id);
        remove_upload(&file_path);
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "Batch worker unavailable");
    }

    info!("Queued batch job {} for {}", job_id, filename);
    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({
            "job_id": job_id,
            "status": BatchStatus::Queued,
        })),
    )
        .into_response()
}

fn save_upload(state: &AppState, job_id: &str, bytes: &[u8]) -> Result<std::path::PathBuf> {
    let path = state
        .config
        .data_paths
        .uploads
        .join(format!("{}.csv", job_id));
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// GET /api/batch/jobs: list all jobs, newest first.
async fn get_batch_jobs(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let jobs = state.batch_jobs.read();
    let mut all_jobs: Vec<&BatchJob> = jobs.values().collect();
    all_jobs.sort_by(|a, b| b.queued_at.cmp(&a.queued_at));

    Json(serde_json::json!({
        "jobs": all_jobs,
        "total": all_jobs.len(),
    }))
}

/// GET /api/batch/jobs/:jobId: get a single job.
async fn get_batch_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> Response {
    let jobs = state.batch_jobs.read();
    match jobs.get(&job_id) {
        Some(job) => (StatusCode::OK, Json(serde_json::json!(job))).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Job not found"),
    }
}

/// GET /api/batch/jobs/:jobId/download: the summarized CSV.
async fn download_batch_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> Response {
    let (status, export_path, filename) = {
        let jobs = state.batch_jobs.read();
        match jobs.get(&job_id) {
            Some(job) => (job.status, job.export_path.clone(), job.filename.clone()),
            None => return error_response(StatusCode::NOT_FOUND, "Job not found"),
        }
    };

    let Some(path) = export_path.filter(|_| status == BatchStatus::Completed) else {
        return error_response(
            StatusCode::CONFLICT,
            format!("Job is {}", status.as_str()),
        );
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let stem: String = std::path::Path::new(&filename)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("batch")
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
                .collect();
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}_summaries.csv\"", stem),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to read export {}: {}", path.display(), e);
            error_response(StatusCode::NOT_FOUND, "Export file missing")
        }
    }
}
