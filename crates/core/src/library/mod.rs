//! Local book library: persisted books and authors.

mod mapper;
mod sqlite;
mod types;

pub use mapper::to_book_author;
pub use sqlite::SqliteLibrary;
pub use types::*;

/// Trait for library storage.
pub trait LibraryStore: Send + Sync {
    /// Save a new author and return it with its assigned id.
    fn save_author(&self, author: &NewAuthor) -> Result<Author, LibraryError>;

    /// Save a new book owned by an already saved author.
    ///
    /// Fails with [`LibraryError::Constraint`] if the author does not exist.
    fn save_book(&self, book: &NewBook, author: &Author) -> Result<Book, LibraryError>;

    /// Save a book together with its author in one transaction.
    ///
    /// An already saved author with the same name and years is reused; the
    /// returned flag tells whether that happened. Nothing is kept on failure.
    fn save_registration(
        &self,
        book: &NewBook,
        author: &NewAuthor,
    ) -> Result<(Book, bool), LibraryError>;

    /// Find a saved author with exactly this name and these life years.
    fn find_author(&self, author: &NewAuthor) -> Result<Option<Author>, LibraryError>;

    /// All books in insertion order.
    fn list_all_books(&self) -> Result<Vec<Book>, LibraryError>;

    /// All authors in insertion order.
    fn list_all_authors(&self) -> Result<Vec<Author>, LibraryError>;

    /// Books owned by one author.
    fn list_books_by_author(&self, author_id: i64) -> Result<Vec<Book>, LibraryError>;

    /// Authors with both years known and `birth_year <= year <= death_year`.
    fn find_authors_alive_in(&self, year: i32) -> Result<Vec<Author>, LibraryError>;

    /// Books whose language code equals `code`, ignoring case.
    fn find_books_by_language(&self, code: &str) -> Result<Vec<Book>, LibraryError>;

    /// Number of books whose language code equals `code`, ignoring case.
    fn count_books_by_language(&self, code: &str) -> Result<u64, LibraryError>;

    /// Delete every book, keeping authors. Returns the number deleted.
    fn clear_books(&self) -> Result<u64, LibraryError>;
}
