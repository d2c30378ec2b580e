//! Plain-text report for a single summary.

use std::time::Duration;

use crate::metrics::{format_duration, SummaryMetrics};

/// Render the original text, its summary and size metrics as a text file.
pub fn render_report(
    original: &str,
    summary: &str,
    metrics: &SummaryMetrics,
    elapsed: Duration,
) -> String {
    format!(
        "Original Text:\n{}\n\nSummary:\n{}\n\nMetrics:\n\
         - Original Words: {}\n\
         - Summary Words: {}\n\
         - Compression: {:.1}%\n\
         - Processing Time: {}\n",
        original.trim(),
        summary,
        metrics.original_words,
        metrics.summary_words,
        metrics.compression_ratio,
        format_duration(elapsed),
    )
}
