//! Search-and-register workflow plus the listing queries behind the menu.

use std::sync::Arc;

use tracing::{debug, info};

use crate::library::{to_book_author, Author, Book, LibraryError, LibraryStore};
use crate::resolver::{Resolution, Resolver};

/// Outcome of registering a title.
#[derive(Debug, Clone)]
pub struct Registration {
    /// The saved book, with its author.
    pub book: Book,
    /// The catalog record it came from and how it was found.
    pub resolution: Resolution,
    /// Whether an already saved author was linked instead of creating one.
    pub reused_author: bool,
}

/// Library operations backed by the remote catalog and the local store.
pub struct LibraryService {
    resolver: Resolver,
    store: Arc<dyn LibraryStore>,
}

impl LibraryService {
    pub fn new(resolver: Resolver, store: Arc<dyn LibraryStore>) -> Self {
        Self { resolver, store }
    }

    /// Look a title up in the remote catalog and save the chosen book and author.
    ///
    /// `Ok(None)` means nothing was found (or the catalog was unreachable) and
    /// nothing was saved. Errors come from the store only.
    pub async fn register_by_title(
        &self,
        title: &str,
    ) -> Result<Option<Registration>, LibraryError> {
        if title.trim().is_empty() {
            debug!("Ignoring blank title query");
            return Ok(None);
        }

        let Some(resolution) = self.resolver.resolve(title).await else {
            info!("No catalog record found for '{}'", title);
            return Ok(None);
        };

        let (new_book, new_author) = to_book_author(&resolution.record);

        let (book, reused_author) = self.store.save_registration(&new_book, &new_author)?;

        info!(
            "Registered '{}' (catalog id {}, via {}) as book {}",
            book.title, resolution.record.id, resolution.resolved_by, book.id
        );

        Ok(Some(Registration {
            book,
            resolution,
            reused_author,
        }))
    }

    pub fn list_all_books(&self) -> Result<Vec<Book>, LibraryError> {
        self.store.list_all_books()
    }

    pub fn list_all_authors(&self) -> Result<Vec<Author>, LibraryError> {
        self.store.list_all_authors()
    }

    pub fn books_by_author(&self, author: &Author) -> Result<Vec<Book>, LibraryError> {
        self.store.list_books_by_author(author.id)
    }

    pub fn authors_alive_in(&self, year: i32) -> Result<Vec<Author>, LibraryError> {
        self.store.find_authors_alive_in(year)
    }

    pub fn books_by_language(&self, code: &str) -> Result<Vec<Book>, LibraryError> {
        self.store.find_books_by_language(code)
    }

    pub fn count_books_by_language(&self, code: &str) -> Result<u64, LibraryError> {
        self.store.count_books_by_language(code)
    }

    pub fn clear_books(&self) -> Result<u64, LibraryError> {
        let deleted = self.store.clear_books()?;
        info!("Deleted {} books", deleted);
        Ok(deleted)
    }
}
