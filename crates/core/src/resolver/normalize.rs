//! Accent- and case-insensitive text normalization for title comparison.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fold `text` for tolerant comparison: lowercase, canonical decomposition,
/// combining marks removed, surrounding whitespace trimmed.
///
/// `normalize("  Dom Casmurro ")` and `normalize("DÓM CASMURRO")` both give
/// `"dom casmurro"`. Lowercasing runs first so characters such as `İ`, whose
/// lowercase form carries a combining mark, still fold to a bare letter.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
