//! Shared application state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use synopsis_core::{LengthTier, SynopsisConfig};
use synopsis_extract::SummarizerBackend;
use tokio::sync::mpsc;

/// CSV batch job status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchJob {
    pub id: String,
    pub filename: String,
    pub column: String,
    pub tier: LengthTier,
    pub max_rows: usize,
    pub status: BatchStatus,
    /// Columns that look like prose, offered to the client for re-runs.
    pub text_columns: Vec<String>,
    pub rows_total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarized: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Uploaded CSV, removed once the job finishes.
    #[serde(skip)]
    pub upload_path: Option<PathBuf>,
    /// Exported CSV, present once the job completes.
    #[serde(skip)]
    pub export_path: Option<PathBuf>,
    pub queued_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl BatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BatchStatus::Queued => "queued",
            BatchStatus::Processing => "processing",
            BatchStatus::Completed => "completed",
            BatchStatus::Failed => "failed",
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, BatchStatus::Completed | BatchStatus::Failed)
    }
}

/// A request to summarize one column of an uploaded CSV.
pub struct BatchRequest {
    pub job_id: String,
    pub file_path: PathBuf,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: SynopsisConfig,
    pub backend: Arc<dyn SummarizerBackend>,
    pub batch_jobs: RwLock<HashMap<String, BatchJob>>,
    pub batch_tx: mpsc::UnboundedSender<BatchRequest>,
    batch_rx: parking_lot::Mutex<Option<mpsc::UnboundedReceiver<BatchRequest>>>,
}

impl AppState {
    pub fn new(config: SynopsisConfig, backend: Arc<dyn SummarizerBackend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            config,
            backend,
            batch_jobs: RwLock::new(HashMap::new()),
            batch_tx: tx,
            batch_rx: parking_lot::Mutex::new(Some(rx)),
        }
    }

    /// Take the batch receiver (can only be called once, by the worker).
    pub fn take_batch_rx(&self) -> Option<mpsc::UnboundedReceiver<BatchRequest>> {
        self.batch_rx.lock().take()
    }

    /// Apply `f` to a job if it still exists.
    pub fn update_job(&self, job_id: &str, f: impl FnOnce(&mut BatchJob)) {
        if let Some(job) = self.batch_jobs.write().get_mut(job_id) {
            f(job);
        }
    }
}

/// Delete an uploaded file the batch queue no longer needs.
pub fn remove_upload(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove upload {}: {}", path.display(), e);
        }
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
