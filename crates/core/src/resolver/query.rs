//! Fallback search terms derived from a free-text query.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Recover a catalog ebook number from a bare id or a pasted URL.
///
/// A query made only of digits is returned as-is (after trimming); otherwise the
/// first run of digits anywhere in the text is used.
pub fn extract_id(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Some(trimmed.to_string());
    }
    DIGIT_RUN.find(trimmed).map(|m| m.as_str().to_string())
}

/// First whitespace-separated token of the query.
pub fn extract_first_word(query: &str) -> Option<String> {
    query.split_whitespace().next().map(str::to_string)
}
