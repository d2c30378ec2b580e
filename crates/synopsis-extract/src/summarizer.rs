//! The extractive summarizer: sentinels, thresholds and the full pipeline.

use serde::Serialize;
use synopsis_core::LengthTier;
use tracing::debug;

use crate::pipeline::{
    clean_text, join_sentences, post_process, score_sentences, segment, select_top,
    truncate_words, FrequencyTable, ScoringWeights, MIN_SENTENCE_WORDS,
};

/// Returned for empty or whitespace-only input.
pub const NO_TEXT_MESSAGE: &str = "No text provided for summarization.";
/// Returned when the cleaned input is below the minimum length.
pub const TOO_SHORT_MESSAGE: &str = "Text is too short to summarize.";

/// Whether `summary` is one of the fixed sentinel messages.
pub fn is_sentinel(summary: &str) -> bool {
    summary == NO_TEXT_MESSAGE || summary == TOO_SHORT_MESSAGE
}

/// How a summary was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Input was empty or whitespace.
    Empty,
    /// Input was below the minimum character or word count.
    TooShort,
    /// Too few eligible sentences to shorten; cleaned text returned.
    PassThrough,
    /// Sentences were scored and selected.
    Extracted,
    /// Like `Extracted`, but cut to the tier's word budget.
    Truncated,
}

impl Outcome {
    pub fn is_sentinel(self) -> bool {
        matches!(self, Self::Empty | Self::TooShort)
    }
}

/// Result of a summarization call.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub text: String,
    pub outcome: Outcome,
    /// Indices of the chosen sentences among the eligible ones, ascending.
    pub selected: Vec<usize>,
    pub eligible_sentences: usize,
}

impl Summary {
    fn sentinel(outcome: Outcome, message: &str) -> Self {
        Self {
            text: message.to_string(),
            outcome,
            selected: Vec::new(),
            eligible_sentences: 0,
        }
    }
}

/// Length gates applied before any scoring happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    /// Cleaned text shorter than this many chars is too short.
    pub min_chars: usize,
    /// Cleaned text with fewer words than this is too short.
    pub min_words: usize,
    /// Words a sentence needs to be eligible.
    pub min_sentence_words: usize,
    /// At or below this many eligible sentences the text is passed through.
    pub pass_through_sentences: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_chars: 50,
            min_words: 10,
            min_sentence_words: MIN_SENTENCE_WORDS,
            pass_through_sentences: 2,
        }
    }
}

/// Deterministic, rule-based summarizer.
///
/// Holds only configuration; every call builds its own frequency table and
/// sentence list, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer {
    weights: ScoringWeights,
    thresholds: Thresholds,
}

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Summarize `text`, returning only the summary string.
    pub fn summarize(&self, text: &str, tier: LengthTier) -> String {
        self.summarize_detailed(text, tier).text
    }

    /// Summarize `text` and report how the result was produced.
    pub fn summarize_detailed(&self, text: &str, tier: LengthTier) -> Summary {
        if text.trim().is_empty() {
            return Summary::sentinel(Outcome::Empty, NO_TEXT_MESSAGE);
        }

        let cleaned = clean_text(text);
        let word_count = cleaned.split_whitespace().count();
        if cleaned.chars().count() < self.thresholds.min_chars
            || word_count < self.thresholds.min_words
        {
            debug!(words = word_count, "Input below minimum length");
            return Summary::sentinel(Outcome::TooShort, TOO_SHORT_MESSAGE);
        }

        let sentences = segment(&cleaned, self.thresholds.min_sentence_words);
        let eligible = sentences.len();
        if eligible <= self.thresholds.pass_through_sentences {
            debug!(eligible, "Too few sentences to shorten, passing through");
            return Summary {
                text: cleaned,
                outcome: Outcome::PassThrough,
                selected: (0..eligible).collect(),
                eligible_sentences: eligible,
            };
        }

        let table = FrequencyTable::build(&cleaned);
        let scores = score_sentences(&sentences, &table, &self.weights);

        let profile = tier.profile();
        let selected = select_top(&scores, profile.sentence_count);
        let chosen: Vec<&str> = selected
            .iter()
            .map(|&i| sentences[i].text.as_str())
            .collect();

        let assembled = post_process(&join_sentences(&chosen));
        let (text, outcome) = match truncate_words(&assembled, profile.max_words) {
            Some(cut) => (cut, Outcome::Truncated),
            None => (assembled, Outcome::Extracted),
        };

        debug!(
            tier = %tier,
            eligible,
            selected = selected.len(),
            "Extractive summary built"
        );

        Summary {
            text,
            outcome,
            selected,
            eligible_sentences: eligible,
        }
    }
}

/// Summarize with the default summarizer.
pub fn summarize(text: &str, tier: LengthTier) -> String {
    ExtractiveSummarizer::new().summarize(text, tier)
}
