//! Multi-factor sentence scoring.
//!
//! A sentence's score is its average word frequency multiplied by position,
//! length, keyword, numeric and terminal-punctuation factors. Each factor is
//! exposed on its own so ordering guarantees can be tested in isolation.

use serde::Serialize;

use super::frequency::{normalize_word, FrequencyTable};
use super::segment::Sentence;

/// Terms that signal a sentence states a finding or conclusion.
///
/// Matched as case-insensitive substrings.
pub const SIGNAL_KEYWORDS: &[&str] = &[
    "important",
    "significant",
    "key",
    "main",
    "primary",
    "essential",
    "critical",
    "major",
    "fundamental",
    "crucial",
    "vital",
    "central",
    "therefore",
    "however",
    "moreover",
    "furthermore",
    "consequently",
    "research",
    "study",
    "found",
    "shows",
    "indicates",
    "reveals",
    "according",
    "report",
    "analysis",
    "conclusion",
    "result",
];

/// Multipliers applied on top of the base frequency score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    /// First sentence of the document.
    pub lead: f64,
    /// Sentences in the first `early_fraction` of the document.
    pub early: f64,
    pub early_fraction: f64,
    /// Sentences past the `late_fraction` mark.
    pub late: f64,
    pub late_fraction: f64,
    /// Inclusive word-count band considered ideal.
    pub ideal_min_words: usize,
    pub ideal_max_words: usize,
    pub ideal_length: f64,
    /// Below this many words a sentence is penalized as terse.
    pub terse_below_words: usize,
    pub terse: f64,
    /// Above this many words a sentence is penalized as rambling.
    pub verbose_above_words: usize,
    pub verbose: f64,
    /// Applied once per distinct keyword present.
    pub keyword: f64,
    pub numeric: f64,
    pub question: f64,
    pub statement: f64,
}

impl ScoringWeights {
    pub const DEFAULT: ScoringWeights = ScoringWeights {
        lead: 1.5,
        early: 1.3,
        early_fraction: 0.3,
        late: 1.15,
        late_fraction: 0.7,
        ideal_min_words: 8,
        ideal_max_words: 25,
        ideal_length: 1.2,
        terse_below_words: 5,
        terse: 0.5,
        verbose_above_words: 40,
        verbose: 0.8,
        keyword: 1.15,
        numeric: 1.2,
        question: 0.8,
        statement: 1.1,
    };

    pub fn position_factor(&self, index: usize, total: usize) -> f64 {
        let i = index as f64;
        let n = total as f64;
        if index == 0 {
            self.lead
        } else if i < n * self.early_fraction {
            self.early
        } else if i > n * self.late_fraction {
            self.late
        } else {
            1.0
        }
    }

    pub fn length_factor(&self, word_count: usize) -> f64 {
        if (self.ideal_min_words..=self.ideal_max_words).contains(&word_count) {
            self.ideal_length
        } else if word_count < self.terse_below_words {
            self.terse
        } else if word_count > self.verbose_above_words {
            self.verbose
        } else {
            1.0
        }
    }

    pub fn keyword_factor(&self, sentence: &str) -> f64 {
        let lower = sentence.to_lowercase();
        let hits = SIGNAL_KEYWORDS
            .iter()
            .filter(|kw| lower.contains(**kw))
            .count();
        self.keyword.powi(hits as i32)
    }

    pub fn numeric_factor(&self, sentence: &str) -> f64 {
        if sentence.chars().any(|c| c.is_ascii_digit()) {
            self.numeric
        } else {
            1.0
        }
    }

    pub fn terminal_factor(&self, sentence: &str) -> f64 {
        let trimmed = sentence.trim_end();
        if trimmed.ends_with('?') {
            self.question
        } else if trimmed.ends_with('.') || trimmed.ends_with('!') {
            self.statement
        } else {
            1.0
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Average frequency-table count over the sentence's words.
pub fn base_score(sentence: &Sentence, table: &FrequencyTable) -> f64 {
    let total: usize = sentence
        .text
        .split_whitespace()
        .filter_map(normalize_word)
        .map(|w| table.get(&w))
        .sum();
    total as f64 / sentence.word_count.max(1) as f64
}

/// Score one sentence out of `total` eligible sentences.
pub fn score_sentence(
    sentence: &Sentence,
    total: usize,
    table: &FrequencyTable,
    weights: &ScoringWeights,
) -> f64 {
    base_score(sentence, table)
        * weights.position_factor(sentence.index, total)
        * weights.length_factor(sentence.word_count)
        * weights.keyword_factor(&sentence.text)
        * weights.numeric_factor(&sentence.text)
        * weights.terminal_factor(&sentence.text)
}

/// Score every sentence; the result is indexed like `sentences`.
pub fn score_sentences(
    sentences: &[Sentence],
    table: &FrequencyTable,
    weights: &ScoringWeights,
) -> Vec<f64> {
    let total = sentences.len();
    sentences
        .iter()
        .map(|s| score_sentence(s, total, table, weights))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::segment::segment;

    const W: ScoringWeights = ScoringWeights::DEFAULT;

    #[test]
    fn test_position_ordering() {
        let total = 10;
        let lead = W.position_factor(0, total);
        let early = W.position_factor(1, total);
        let middle = W.position_factor(5, total);
        let late = W.position_factor(9, total);
        assert!(lead >= early);
        assert!(early >= middle);
        assert!(early >= late);
        assert_eq!(middle, 1.0);
    }

    #[test]
    fn test_length_ordering() {
        let ideal = W.length_factor(12);
        assert!(ideal > W.length_factor(3));
        assert!(ideal > W.length_factor(45));
        assert!(ideal > W.length_factor(30));
        assert_eq!(W.length_factor(6), 1.0);
        assert_eq!(W.length_factor(8), W.ideal_length);
        assert_eq!(W.length_factor(25), W.ideal_length);
    }

    #[test]
    fn test_keywords_compound() {
        let none = W.keyword_factor("The sky is blue.");
        let one = W.keyword_factor("An IMPORTANT note.");
        let two = W.keyword_factor("Important research here.");
        assert_eq!(none, 1.0);
        assert!(one > none);
        assert!(two > one);
        assert!((two - W.keyword * W.keyword).abs() < 1e-12);
    }

    #[test]
    fn test_numeric_and_terminal() {
        assert_eq!(W.numeric_factor("Sales rose 12 percent."), W.numeric);
        assert_eq!(W.numeric_factor("Sales rose."), 1.0);
        assert_eq!(W.terminal_factor("Is it?"), W.question);
        assert_eq!(W.terminal_factor("It is!"), W.statement);
        assert_eq!(W.terminal_factor("It is"), 1.0);
    }

    #[test]
    fn test_base_score_normalizes_by_length() {
        let text = "Rust memory safety matters. Rust memory safety matters a lot for everyone here.";
        let sentences = segment(text, 3);
        let table = FrequencyTable::build(text);
        let short = base_score(&sentences[0], &table);
        let long = base_score(&sentences[1], &table);
        assert!(short > long);
    }

    #[test]
    fn test_keyword_sentence_outranks_plain_twin() {
        let text = "Engineers measured river levels across the valley today. \
                    Engineers measured river levels across the valley, however.";
        let table = FrequencyTable::build(text);
        let sentences = segment(text, 3);
        // Compare both sentences at the same position to isolate the keyword.
        let plain = Sentence { index: 4, ..sentences[0].clone() };
        let keyed = Sentence { index: 4, ..sentences[1].clone() };
        let plain_score = score_sentence(&plain, 10, &table, &W);
        let keyed_score = score_sentence(&keyed, 10, &table, &W);
        assert!(keyed_score > plain_score);
    }
}
