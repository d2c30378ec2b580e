//! Summarizing many texts: plain lists and one column of a CSV table.
//!
//! Each text is summarized independently, so work is spread over the rayon
//! pool; results always come back in input order.

use rayon::prelude::*;
use serde::Serialize;
use synopsis_core::config::MAX_BATCH_ROWS;
use synopsis_core::{Error, LengthTier, Result};
use tracing::info;

use crate::backend::SummarizerBackend;
use crate::metrics::SummaryMetrics;
use crate::pipeline::clean_tabular_text;
use crate::summarizer::{Outcome, Summary, TOO_SHORT_MESSAGE};
use crate::table::Table;

/// Cells shorter than this are skipped without calling the backend.
pub const MIN_CELL_CHARS: usize = 20;

/// Summarize a list of texts in parallel, preserving order.
pub fn summarize_many<S>(texts: &[S], tier: LengthTier, backend: &dyn SummarizerBackend) -> Vec<Summary>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|t| backend.summarize_detailed(t.as_ref(), tier))
        .collect()
}

/// One summarized table row.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRecord {
    /// Zero-based data row index.
    pub row: usize,
    pub original: String,
    pub summary: String,
    pub outcome: Outcome,
    pub metrics: SummaryMetrics,
}

impl BatchRecord {
    pub fn is_skipped(&self) -> bool {
        self.outcome.is_sentinel()
    }
}

/// Results of summarizing one column of a table.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub column: String,
    pub tier: LengthTier,
    pub records: Vec<BatchRecord>,
    pub summarized: usize,
    pub skipped: usize,
    /// Share of rows that produced a real summary, in percent.
    pub success_rate: f64,
}

impl BatchReport {
    fn new(column: String, tier: LengthTier, records: Vec<BatchRecord>) -> Self {
        let skipped = records.iter().filter(|r| r.is_skipped()).count();
        let summarized = records.len() - skipped;
        let success_rate = if records.is_empty() {
            0.0
        } else {
            (summarized as f64 / records.len() as f64 * 1000.0).round() / 10.0
        };
        Self {
            column,
            tier,
            records,
            summarized,
            skipped,
            success_rate,
        }
    }

    /// Export as CSV: the source column, the summary and size metrics.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            self.column.as_str(),
            "summary",
            "original_words",
            "summary_words",
            "compression_ratio",
        ])?;
        for record in &self.records {
            writer.write_record([
                record.original.clone(),
                record.summary.clone(),
                record.metrics.original_words.to_string(),
                record.metrics.summary_words.to_string(),
                format!("{:.1}", record.metrics.compression_ratio),
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Internal(format!("CSV flush failed: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| Error::Internal(e.to_string()))
    }
}

/// Summarizes the leading rows of one table column.
///
/// Built through [`BatchRunner::new`], which caps the row count.
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    tier: LengthTier,
    max_rows: usize,
}

impl BatchRunner {
    pub fn new(tier: LengthTier, max_rows: usize) -> Self {
        Self {
            tier,
            max_rows: max_rows.clamp(1, MAX_BATCH_ROWS),
        }
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn run(
        &self,
        table: &Table,
        column: &str,
        backend: &dyn SummarizerBackend,
    ) -> Result<BatchReport> {
        let col = table
            .column_index(column)
            .ok_or_else(|| Error::InvalidInput(format!("unknown column '{}'", column)))?;

        let rows = table.len().min(self.max_rows);
        info!(column, rows, tier = %self.tier, "Starting batch summarization");

        let records: Vec<BatchRecord> = (0..rows)
            .into_par_iter()
            .map(|row| {
                let original = clean_tabular_text(table.cell(row, col));
                let (summary, outcome) = if original.chars().count() < MIN_CELL_CHARS {
                    (TOO_SHORT_MESSAGE.to_string(), Outcome::TooShort)
                } else {
                    let s = backend.summarize_detailed(&original, self.tier);
                    (s.text, s.outcome)
                };
                let metrics = SummaryMetrics::compute(&original, &summary);
                BatchRecord {
                    row,
                    original,
                    summary,
                    outcome,
                    metrics,
                }
            })
            .collect();

        let report = BatchReport::new(column.to_string(), self.tier, records);
        info!(
            summarized = report.summarized,
            skipped = report.skipped,
            "Batch summarization finished"
        );
        Ok(report)
    }
}
