//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use literalura_core::testing::{fixtures, MockCatalogClient};
//!
//! let catalog = MockCatalogClient::new();
//! let record = fixtures::record(55752, "Dom Casmurro", "Machado de Assis", "pt");
//! catalog.set_search_results("Dom Casmurro", vec![record]).await;
//! ```

mod mock_catalog;

pub use mock_catalog::{MockCatalogClient, RecordedCatalogQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::collections::BTreeMap;

    use crate::gutendex::{CatalogAuthor, CatalogRecord};
    use crate::library::{NewAuthor, NewBook};

    /// A catalog record with one author (no years) and one language.
    pub fn record(id: u64, title: &str, author: &str, language: &str) -> CatalogRecord {
        CatalogRecord {
            id,
            title: Some(title.to_string()),
            languages: vec![language.to_string()],
            download_count: Some(1000),
            authors: vec![CatalogAuthor {
                name: Some(author.to_string()),
                birth_year: None,
                death_year: None,
            }],
            formats: BTreeMap::from([(
                "text/html".to_string(),
                format!("https://www.gutenberg.org/ebooks/{}.html.images", id),
            )]),
            summaries: Vec::new(),
        }
    }

    /// A catalog record whose single author has known life years.
    pub fn record_with_years(
        id: u64,
        title: &str,
        author: &str,
        birth_year: i32,
        death_year: i32,
    ) -> CatalogRecord {
        let mut record = record(id, title, author, "en");
        record.authors[0].birth_year = Some(birth_year);
        record.authors[0].death_year = Some(death_year);
        record
    }

    /// An unsaved author.
    pub fn new_author(name: &str, birth_year: Option<i32>, death_year: Option<i32>) -> NewAuthor {
        NewAuthor {
            name: name.to_string(),
            birth_year,
            death_year,
        }
    }

    /// An unsaved book.
    pub fn new_book(title: &str, language: &str, download_count: u64) -> NewBook {
        NewBook {
            title: title.to_string(),
            language: language.to_string(),
            download_count,
        }
    }
}
