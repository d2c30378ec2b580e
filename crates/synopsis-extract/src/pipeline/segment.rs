//! Sentence segmentation.

use serde::Serialize;

/// Sentences with fewer words than this never become summary candidates.
pub const MIN_SENTENCE_WORDS: usize = 3;

/// An eligible sentence with its position among the eligible sentences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub index: usize,
    pub word_count: usize,
}

/// Split text after `.`, `!` or `?` followed by whitespace.
///
/// Terminal punctuation stays with its sentence; a trailing fragment without
/// punctuation is returned as the last sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if (b == b'.' || b == b'!' || b == b'?')
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_whitespace()
        {
            let s = text[start..=i].trim();
            if !s.is_empty() {
                sentences.push(s);
            }
            start = i + 1;
        }
    }
    let s = text[start..].trim();
    if !s.is_empty() {
        sentences.push(s);
    }
    sentences
}

/// Segment text and keep sentences with at least `min_words` words.
pub fn segment(text: &str, min_words: usize) -> Vec<Sentence> {
    split_sentences(text)
        .into_iter()
        .filter_map(|s| {
            let word_count = s.split_whitespace().count();
            (word_count >= min_words).then_some((s, word_count))
        })
        .enumerate()
        .map(|(index, (s, word_count))| Sentence {
            text: s.to_string(),
            index,
            word_count,
        })
        .collect()
}
