//! Property tests for the extractive summarizer.

use proptest::prelude::*;
use synopsis_core::LengthTier;
use synopsis_extract::pipeline::clean_text;
use synopsis_extract::{ExtractiveSummarizer, Outcome, SummaryMetrics, TOO_SHORT_MESSAGE};

const VOCAB: &[&str] = &[
    "river", "market", "policy", "energy", "city", "council", "study", "found", "data", "growth",
    "the", "a", "of", "and", "in", "2024", "rates", "water", "school", "budget", "important",
    "people", "report", "however", "local", "new",
];

fn sentence() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(VOCAB), 3..16),
        prop::sample::select(&[".", "!", "?"][..]),
    )
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end))
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..14).prop_map(|s| s.join(" "))
}

proptest! {
    #[test]
    fn test_never_panics_and_never_empty(text in ".{1,400}") {
        let summarizer = ExtractiveSummarizer::new();
        for tier in LengthTier::ALL {
            prop_assert!(!summarizer.summarize(&text, tier).is_empty());
        }
    }

    #[test]
    fn test_deterministic(text in document()) {
        let summarizer = ExtractiveSummarizer::new();
        for tier in LengthTier::ALL {
            prop_assert_eq!(summarizer.summarize(&text, tier), summarizer.summarize(&text, tier));
        }
    }

    #[test]
    fn test_few_words_is_sentinel(words in prop::collection::vec("[a-z]{1,12}", 1..10)) {
        let text = words.join(" ");
        prop_assert_eq!(
            ExtractiveSummarizer::new().summarize(&text, LengthTier::Medium),
            TOO_SHORT_MESSAGE
        );
    }

    #[test]
    fn test_selection_bounded_ordered_and_monotonic(text in document()) {
        let summarizer = ExtractiveSummarizer::new();
        let mut previous = 0;
        for tier in LengthTier::ALL {
            let summary = summarizer.summarize_detailed(&text, tier);
            prop_assert!(summary.selected.windows(2).all(|w| w[0] < w[1]));
            if matches!(summary.outcome, Outcome::Extracted | Outcome::Truncated) {
                prop_assert!(summary.selected.len() <= summary.eligible_sentences);
                prop_assert!(summary.selected.len() >= previous);
                previous = summary.selected.len();
            }
        }
    }

    #[test]
    fn test_pass_through_returns_cleaned_text(text in document()) {
        let summary = ExtractiveSummarizer::new().summarize_detailed(&text, LengthTier::Long);
        if summary.outcome == Outcome::PassThrough {
            prop_assert!(summary.eligible_sentences <= 2);
            prop_assert_eq!(summary.text, clean_text(&text));
        }
    }

    #[test]
    fn test_compression_ratio_in_range(text in document()) {
        for tier in LengthTier::ALL {
            let summary = ExtractiveSummarizer::new().summarize_detailed(&text, tier);
            if summary.outcome.is_sentinel() {
                continue;
            }
            let metrics = SummaryMetrics::compute(&clean_text(&text), &summary.text);
            prop_assert!(metrics.compression_ratio >= 0.0);
            prop_assert!(metrics.compression_ratio < 100.0);
        }
    }
}
