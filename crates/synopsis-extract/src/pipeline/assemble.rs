//! Summary assembly and post-processing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::clean::collapse_whitespace;

static PERIOD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

/// Marker appended when a summary is cut to its word budget.
pub const ELLIPSIS: &str = "...";

fn ends_with_terminal(s: &str) -> bool {
    s.ends_with(&['.', '!', '?'][..])
}

/// Join sentences in the given order.
///
/// Sentences are separated by `". "`, except that a sentence which already
/// ends in terminal punctuation is not given a second period.
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    let mut out = String::new();
    for sentence in sentences {
        let s = sentence.as_ref().trim();
        if s.is_empty() {
            continue;
        }
        if !out.is_empty() {
            if !ends_with_terminal(&out) {
                out.push('.');
            }
            out.push(' ');
        }
        out.push_str(s);
    }
    out
}

/// Normalize spacing and punctuation, then capitalize the first character.
pub fn post_process(summary: &str) -> String {
    let collapsed = collapse_whitespace(summary);
    let mut text = PERIOD_RUN.replace_all(&collapsed, ".").into_owned();

    if !text.is_empty() && !ends_with_terminal(&text) {
        text.push('.');
    }

    capitalize_first(&text)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cut `text` to `max_words` words and append [`ELLIPSIS`].
///
/// Returns `None` when the text already fits.
pub fn truncate_words(text: &str, max_words: usize) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return None;
    }
    let mut kept = words[..max_words].join(" ");
    let trimmed_len = kept
        .trim_end_matches(|c: char| c.is_ascii_punctuation() && c != ')' && c != '"')
        .len();
    kept.truncate(trimmed_len);
    kept.push_str(ELLIPSIS);
    Some(kept)
}
