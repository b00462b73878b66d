//! Catalog record to library record conversion.
//!
//! Only the first listed author and the first listed language are kept.

use crate::gutendex::CatalogRecord;

use super::types::{NewAuthor, NewBook, DEFAULT_LANGUAGE, UNKNOWN_AUTHOR};

/// Build the unsaved book and author for a catalog record.
pub fn to_book_author(record: &CatalogRecord) -> (NewBook, NewAuthor) {
    let language = record
        .languages
        .first()
        .map(|code| code.trim().to_lowercase())
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let book = NewBook {
        title: record.title.clone().unwrap_or_default(),
        language,
        download_count: record.download_count.unwrap_or(0),
    };

    let author = match record.authors.first() {
        Some(first) => NewAuthor {
            name: first
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(UNKNOWN_AUTHOR)
                .to_string(),
            birth_year: first.birth_year,
            death_year: first.death_year,
        },
        None => NewAuthor {
            name: UNKNOWN_AUTHOR.to_string(),
            birth_year: None,
            death_year: None,
        },
    };

    (book, author)
}
