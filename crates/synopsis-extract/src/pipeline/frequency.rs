//! Whole-document word frequency table.

use std::collections::HashMap;

/// Words this short or shorter are ignored for frequency scoring.
pub const MIN_SCORED_WORD_CHARS: usize = 3;

/// Lower-case a whitespace token and trim surrounding punctuation.
///
/// Returns `None` when the remaining word is too short to count.
pub fn normalize_word(token: &str) -> Option<String> {
    let word = token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    (word.chars().count() > MIN_SCORED_WORD_CHARS).then_some(word)
}

/// Occurrence counts of normalized words across a document.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count every scored word in `text`.
    pub fn build(text: &str) -> Self {
        let mut counts = HashMap::new();
        for word in text.split_whitespace().filter_map(normalize_word) {
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for an already-normalized word (0 if absent).
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct scored words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
