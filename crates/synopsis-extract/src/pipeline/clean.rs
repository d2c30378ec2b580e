//! Whitespace and character-set normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Anything that is not a word char, whitespace, or allowed punctuation.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.!?,;:\-()"']+"#).unwrap());

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Collapse whitespace and drop characters outside the allowed set.
///
/// Word order and sentence-terminal punctuation are preserved.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let filtered = DISALLOWED.replace_all(&collapsed, "");
    // Removing a symbol between two spaces can leave a double space behind.
    WHITESPACE.replace_all(&filtered, " ").trim().to_string()
}

/// Clean a cell read from a CSV table: strip HTML tags, then [`clean_text`].
pub fn clean_tabular_text(text: &str) -> String {
    clean_text(&HTML_TAG.replace_all(text, ""))
}

/// Collapse runs of whitespace to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  one \n\n two\tthree  "), "one two three");
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        let text = r#"Wait - really? Yes (mostly): "fine", it's done; ok!"#;
        assert_eq!(clean_text(text), text);
    }

    #[test]
    fn test_drops_symbols() {
        assert_eq!(clean_text("Price: $100 & rising #fast"), "Price: 100 rising fast");
        assert_eq!(clean_text("emoji 🚀 here."), "emoji here.");
    }

    #[test]
    fn test_keeps_unicode_words() {
        assert_eq!(clean_text("Café déjà vu."), "Café déjà vu.");
    }

    #[test]
    fn test_tabular_strips_html() {
        assert_eq!(
            clean_tabular_text("<p>Hello <b>world</b></p>\n<br/>Again."),
            "Hello world Again."
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
    }
}
