//! Background batch queue: summarizes uploaded CSV files one job at a time.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use synopsis_core::{Error, Result};
use synopsis_extract::{BatchReport, BatchRunner, Table};
use tracing::{error, info};

use crate::state::{now_millis, remove_upload, AppState, BatchStatus};

/// Finished jobs kept in memory.
const MAX_FINISHED_JOBS: usize = 100;

/// Start the background batch worker task.
pub fn start_batch_worker(state: Arc<AppState>) {
    let mut rx = match state.take_batch_rx() {
        Some(rx) => rx,
        None => {
            error!("Batch worker already started");
            return;
        }
    };

    tokio::spawn(async move {
        info!("Background batch worker started");
        while let Some(request) = rx.recv().await {
            let worker_state = state.clone();
            let job_id = request.job_id.clone();
            let upload = request.file_path.clone();
            let result = tokio::task::spawn_blocking(move || {
                process_batch_job(&worker_state, &request.job_id, &request.file_path)
            })
            .await;
            if let Err(e) = result {
                error!("Batch job {} panicked: {}", job_id, e);
                remove_upload(&upload);
                state.update_job(&job_id, |job| {
                    job.status = BatchStatus::Failed;
                    job.error = Some("internal error".into());
                    job.upload_path = None;
                    job.completed_at = Some(now_millis());
                });
            }
            cleanup_old_jobs(&state);
        }
    });
}

fn process_batch_job(state: &AppState, job_id: &str, file_path: &Path) {
    let (runner, column) = {
        let mut jobs = state.batch_jobs.write();
        let Some(job) = jobs.get_mut(job_id) else {
            remove_upload(file_path);
            return;
        };
        job.status = BatchStatus::Processing;
        job.started_at = Some(now_millis());
        (BatchRunner::new(job.tier, job.max_rows), job.column.clone())
    };

    info!("Processing batch job {}: column '{}'", job_id, column);

    let result = run_and_export(state, job_id, file_path, &runner, &column);
    remove_upload(file_path);

    match result {
        Ok((report, export_path)) => {
            state.update_job(job_id, |job| {
                job.status = BatchStatus::Completed;
                job.summarized = Some(report.summarized);
                job.skipped = Some(report.skipped);
                job.success_rate = Some(report.success_rate);
                job.upload_path = None;
                job.export_path = Some(export_path);
                job.completed_at = Some(now_millis());
            });
            info!(
                "Batch job {} done: {} summarized, {} skipped",
                job_id, report.summarized, report.skipped
            );
        }
        Err(e) => {
            error!("Batch job {} failed: {}", job_id, e);
            state.update_job(job_id, |job| {
                job.status = BatchStatus::Failed;
                job.error = Some(e.to_string());
                job.upload_path = None;
                job.completed_at = Some(now_millis());
            });
        }
    }
}

fn run_and_export(
    state: &AppState,
    job_id: &str,
    file_path: &Path,
    runner: &BatchRunner,
    column: &str,
) -> Result<(BatchReport, PathBuf)> {
    let table = Table::open(file_path)?;
    if table.is_empty() {
        return Err(Error::InvalidInput("CSV has no data rows".into()));
    }
    let report = runner.run(&table, column, state.backend.as_ref())?;
    let export_path = state
        .config
        .data_paths
        .exports
        .join(format!("summaries_{}.csv", job_id));
    std::fs::write(&export_path, report.to_csv()?)?;
    Ok((report, export_path))
}

fn cleanup_old_jobs(state: &AppState) {
    let mut jobs = state.batch_jobs.write();
    let mut finished: Vec<(String, i64)> = jobs
        .values()
        .filter(|j| j.status.is_finished())
        .map(|j| (j.id.clone(), j.completed_at.unwrap_or(j.queued_at)))
        .collect();

    if finished.len() > MAX_FINISHED_JOBS {
        finished.sort_by_key(|(_, t)| *t);
        let remove_count = finished.len() - MAX_FINISHED_JOBS;
        for (id, _) in finished.into_iter().take(remove_count) {
            if let Some(job) = jobs.remove(&id) {
                if let Some(path) = job.upload_path {
                    remove_upload(&path);
                }
                if let Some(path) = job.export_path {
                    let _ = std::fs::remove_file(path);
                }
            }
        }
    }
}
