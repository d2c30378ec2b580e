//! Caller-side input validation.

use serde::Serialize;
use synopsis_core::InputLimits;

use crate::pipeline::clean::collapse_whitespace;

/// Outcome of validating text before summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: "Text is valid for summarization".into(),
        }
    }

    fn reject(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Check text against word-count and character-mix limits.
pub fn validate_text(text: &str, limits: &InputLimits) -> Validation {
    if text.trim().is_empty() {
        return Validation::reject("Text cannot be empty");
    }

    let clean = collapse_whitespace(text);
    let words = clean.split_whitespace().count();

    if words < limits.min_words {
        return Validation::reject(format!(
            "Text is too short. Please provide at least {} words.",
            limits.min_words
        ));
    }
    if words > limits.max_words {
        return Validation::reject(format!(
            "Text is too long. Please provide less than {} words.",
            limits.max_words
        ));
    }

    let total = clean.chars().count();
    let alpha = clean.chars().filter(|c| c.is_alphabetic()).count();
    if (alpha as f64) / (total as f64) < limits.min_alpha_ratio {
        return Validation::reject("Text contains too many non-alphabetic characters.");
    }

    Validation::ok()
}
