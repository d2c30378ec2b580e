//! Compression metrics and duration formatting.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Size comparison between an original text and its summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub original_words: usize,
    pub summary_words: usize,
    pub original_chars: usize,
    pub summary_chars: usize,
    /// Percentage of words removed, one decimal.
    pub compression_ratio: f64,
    /// Percentage of characters removed, one decimal.
    pub char_compression_ratio: f64,
    pub sentences_original: usize,
    pub sentences_summary: usize,
    pub avg_words_per_sentence_original: f64,
    pub avg_words_per_sentence_summary: f64,
}

impl SummaryMetrics {
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_words = original.split_whitespace().count();
        let summary_words = summary.split_whitespace().count();
        let original_chars = original.chars().count();
        let summary_chars = summary.chars().count();
        let sentences_original = count_sentences(original);
        let sentences_summary = count_sentences(summary);

        Self {
            original_words,
            summary_words,
            original_chars,
            summary_chars,
            compression_ratio: compression(original_words, summary_words),
            char_compression_ratio: compression(original_chars, summary_chars),
            sentences_original,
            sentences_summary,
            avg_words_per_sentence_original: round1(
                original_words as f64 / sentences_original.max(1) as f64,
            ),
            avg_words_per_sentence_summary: round1(
                summary_words as f64 / sentences_summary.max(1) as f64,
            ),
        }
    }
}

/// `(1 - after/before) * 100`, one decimal; 0 when `before` is 0.
pub fn compression(before: usize, after: usize) -> f64 {
    if before == 0 {
        return 0.0;
    }
    round1((before as f64 - after as f64) / before as f64 * 100.0)
}

fn count_sentences(text: &str) -> usize {
    SENTENCE_BREAK
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .count()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Human-readable duration: `850ms`, `2.4s`, `1m 3.5s`.
pub fn format_duration(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();
    if seconds < 1.0 {
        format!("{:.0}ms", seconds * 1000.0)
    } else if seconds < 60.0 {
        format!("{:.1}s", seconds)
    } else {
        let minutes = (seconds / 60.0).floor() as u64;
        format!("{}m {:.1}s", minutes, seconds - minutes as f64 * 60.0)
    }
}
