//! Frequency-based keyword extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").unwrap());

/// Common words that carry no topical signal.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "that", "this", "with", "from", "they", "been", "have", "will", "would", "could",
        "should", "their", "there", "where", "when", "what", "which", "more", "most", "some",
        "such", "very", "well", "also", "just", "like", "than", "only", "over", "after",
        "before", "between", "through", "during",
    ]
    .into_iter()
    .collect()
});

/// Top `max_keywords` words by count; ties keep first-occurrence order.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (position, m) in WORD.find_iter(&lower).enumerate() {
        let word = m.as_str();
        if STOP_WORDS.contains(word) {
            continue;
        }
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut sorted: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    sorted
        .into_iter()
        .take(max_keywords)
        .map(|(w, _)| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_by_frequency() {
        let text = "Solar power grows. Solar panels are cheap, and wind power helps solar adoption.";
        let keywords = extract_keywords(text, 3);
        assert_eq!(keywords, vec!["solar", "power", "grows"]);
    }

    #[test]
    fn test_skips_stop_words_and_short_words() {
        let keywords = extract_keywords("This is what they would do with the data", 10);
        assert_eq!(keywords, vec!["data"]);
    }
}
