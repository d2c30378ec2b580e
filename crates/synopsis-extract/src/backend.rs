//! Summarizer backend trait and the default extractive backend.
//!
//! The `SummarizerBackend` trait abstracts over how a summary is produced.
//! Callers hold an `Arc<dyn SummarizerBackend>` built by [`create_backend`]
//! and never depend on which implementation is behind it.

use std::sync::Arc;

use serde::Serialize;
use synopsis_core::LengthTier;

use crate::summarizer::{ExtractiveSummarizer, Summary};

/// Description of the active summarization engine.
#[derive(Debug, Clone, Serialize)]
pub struct EngineInfo {
    pub model_type: String,
    pub model_name: String,
    pub description: String,
    pub max_input_words: usize,
}

/// Trait for summarization backends.
pub trait SummarizerBackend: Send + Sync {
    /// Summarize and report how the result was produced.
    fn summarize_detailed(&self, text: &str, tier: LengthTier) -> Summary;

    fn summarize(&self, text: &str, tier: LengthTier) -> String {
        self.summarize_detailed(text, tier).text
    }

    fn info(&self) -> EngineInfo;

    /// Whether the backend can serve requests.
    fn is_available(&self) -> bool;
}

/// Rule-based backend; always available.
pub struct ExtractiveBackend {
    summarizer: ExtractiveSummarizer,
    max_input_words: usize,
}

impl ExtractiveBackend {
    pub fn new(summarizer: ExtractiveSummarizer, max_input_words: usize) -> Self {
        Self {
            summarizer,
            max_input_words,
        }
    }
}

impl SummarizerBackend for ExtractiveBackend {
    fn summarize_detailed(&self, text: &str, tier: LengthTier) -> Summary {
        self.summarizer.summarize_detailed(text, tier)
    }

    fn info(&self) -> EngineInfo {
        EngineInfo {
            model_type: "extractive".into(),
            model_name: "Extractive".into(),
            description: "Rule-based extractive summarization".into(),
            max_input_words: self.max_input_words,
        }
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Create the summarization backend used by the server and CLI.
pub fn create_backend(max_input_words: usize) -> Arc<dyn SummarizerBackend> {
    tracing::info!("Using extractive summarization backend");
    Arc::new(ExtractiveBackend::new(
        ExtractiveSummarizer::new(),
        max_input_words,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::TOO_SHORT_MESSAGE;

    #[test]
    fn test_backend_delegates() {
        let backend = create_backend(10_000);
        assert!(backend.is_available());
        assert_eq!(backend.info().model_type, "extractive");
        assert_eq!(backend.info().max_input_words, 10_000);
        assert_eq!(backend.summarize("tiny", LengthTier::Short), TOO_SHORT_MESSAGE);
    }
}
