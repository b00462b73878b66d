//! Literalura core: resolve book titles against the Gutendex catalog and keep
//! a local SQLite library of the books and authors found.

pub mod config;
pub mod gutendex;
pub mod library;
pub mod resolver;
pub mod service;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, CatalogConfig,
    Config, ConfigError, DatabaseConfig,
};
pub use gutendex::{
    CatalogAuthor, CatalogClient, CatalogError, CatalogRecord, GutendexClient, SearchPage,
};
pub use library::{
    to_book_author, Author, Book, LibraryError, LibraryStore, NewAuthor, NewBook, SqliteLibrary,
    DEFAULT_LANGUAGE, UNKNOWN_AUTHOR,
};
pub use resolver::{
    best_match, extract_first_word, extract_id, normalize, Resolution, ResolvedBy, Resolver,
};
pub use service::{LibraryService, Registration};
