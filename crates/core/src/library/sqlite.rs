//! SQLite-backed library implementation.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use super::{Author, Book, LibraryError, LibraryStore, NewAuthor, NewBook};

const BOOK_COLUMNS: &str = "b.id, b.title, b.language, b.download_count,
                            a.id, a.name, a.birth_year, a.death_year
                            FROM books b JOIN authors a ON a.id = b.author_id";

/// SQLite-backed library.
pub struct SqliteLibrary {
    conn: Mutex<Connection>,
}

impl SqliteLibrary {
    /// Open the library, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, LibraryError> {
        let conn = Connection::open(path)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory library (useful for testing).
    pub fn in_memory() -> Result<Self, LibraryError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), LibraryError> {
        conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS authors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                birth_year INTEGER,
                death_year INTEGER
            );

            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                language TEXT NOT NULL,
                download_count INTEGER NOT NULL DEFAULT 0,
                author_id INTEGER NOT NULL REFERENCES authors(id)
            );

            CREATE INDEX IF NOT EXISTS idx_books_language ON books(language);
            CREATE INDEX IF NOT EXISTS idx_books_author ON books(author_id);
            "#,
        )?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, LibraryError> {
        self.conn
            .lock()
            .map_err(|_| LibraryError::Internal("library connection lock poisoned".to_string()))
    }

    fn row_to_author(row: &rusqlite::Row) -> rusqlite::Result<Author> {
        Ok(Author {
            id: row.get(0)?,
            name: row.get(1)?,
            birth_year: row.get(2)?,
            death_year: row.get(3)?,
        })
    }

    /// Convert a row selected with `BOOK_COLUMNS`.
    fn row_to_book(row: &rusqlite::Row) -> rusqlite::Result<Book> {
        let download_count: i64 = row.get(3)?;
        Ok(Book {
            id: row.get(0)?,
            title: row.get(1)?,
            language: row.get(2)?,
            download_count: download_count.max(0) as u64,
            author: Author {
                id: row.get(4)?,
                name: row.get(5)?,
                birth_year: row.get(6)?,
                death_year: row.get(7)?,
            },
        })
    }

    fn query_books(
        conn: &Connection,
        filter: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Book>, LibraryError> {
        let sql = format!("SELECT {} {} ORDER BY b.id", BOOK_COLUMNS, filter);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params, Self::row_to_book)?;

        let mut books = Vec::new();
        for row in rows {
            books.push(row?);
        }
        Ok(books)
    }

    fn query_authors(
        conn: &Connection,
        filter: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Author>, LibraryError> {
        let sql = format!(
            "SELECT id, name, birth_year, death_year FROM authors {} ORDER BY id",
            filter
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params, Self::row_to_author)?;

        let mut authors = Vec::new();
        for row in rows {
            authors.push(row?);
        }
        Ok(authors)
    }
    fn insert_author(conn: &Connection, author: &NewAuthor) -> Result<Author, LibraryError> {
        conn.execute(
            "INSERT INTO authors (name, birth_year, death_year) VALUES (?, ?, ?)",
            params![&author.name, author.birth_year, author.death_year],
        )?;

        Ok(Author {
            id: conn.last_insert_rowid(),
            name: author.name.clone(),
            birth_year: author.birth_year,
            death_year: author.death_year,
        })
    }

    fn insert_book(
        conn: &Connection,
        book: &NewBook,
        author: &Author,
    ) -> Result<Book, LibraryError> {
        let language = book.language.trim().to_lowercase();

        conn.execute(
            "INSERT INTO books (title, language, download_count, author_id) VALUES (?, ?, ?, ?)",
            params![&book.title, &language, book.download_count as i64, author.id],
        )?;

        Ok(Book {
            id: conn.last_insert_rowid(),
            title: book.title.clone(),
            language,
            download_count: book.download_count,
            author: author.clone(),
        })
    }

    fn select_author(
        conn: &Connection,
        author: &NewAuthor,
    ) -> Result<Option<Author>, LibraryError> {
        // IS compares NULLs as equal, so unknown years match unknown years.
        let found = conn
            .query_row(
                "SELECT id, name, birth_year, death_year FROM authors
                 WHERE name = ? AND birth_year IS ? AND death_year IS ?
                 ORDER BY id LIMIT 1",
                params![&author.name, author.birth_year, author.death_year],
                Self::row_to_author,
            )
            .optional()?;

        Ok(found)
    }
}

impl LibraryStore for SqliteLibrary {
    fn save_author(&self, author: &NewAuthor) -> Result<Author, LibraryError> {
        let conn = self.conn()?;
        Self::insert_author(&conn, author)
    }

    fn save_book(&self, book: &NewBook, author: &Author) -> Result<Book, LibraryError> {
        let conn = self.conn()?;
        Self::insert_book(&conn, book, author)
    }

    fn save_registration(
        &self,
        book: &NewBook,
        author: &NewAuthor,
    ) -> Result<(Book, bool), LibraryError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let (author, reused) = match Self::select_author(&tx, author)? {
            Some(existing) => (existing, true),
            None => (Self::insert_author(&tx, author)?, false),
        };
        let book = Self::insert_book(&tx, book, &author)?;

        tx.commit()?;
        Ok((book, reused))
    }

    fn find_author(&self, author: &NewAuthor) -> Result<Option<Author>, LibraryError> {
        let conn = self.conn()?;
        Self::select_author(&conn, author)
    }

    fn list_all_books(&self) -> Result<Vec<Book>, LibraryError> {
        let conn = self.conn()?;
        Self::query_books(&conn, "", [])
    }

    fn list_all_authors(&self) -> Result<Vec<Author>, LibraryError> {
        let conn = self.conn()?;
        Self::query_authors(&conn, "", [])
    }

    fn list_books_by_author(&self, author_id: i64) -> Result<Vec<Book>, LibraryError> {
        let conn = self.conn()?;
        Self::query_books(&conn, "WHERE b.author_id = ?", params![author_id])
    }

    fn find_authors_alive_in(&self, year: i32) -> Result<Vec<Author>, LibraryError> {
        let conn = self.conn()?;
        Self::query_authors(
            &conn,
            "WHERE birth_year IS NOT NULL AND death_year IS NOT NULL
               AND birth_year <= ?1 AND death_year >= ?1",
            params![year],
        )
    }

    fn find_books_by_language(&self, code: &str) -> Result<Vec<Book>, LibraryError> {
        let conn = self.conn()?;
        Self::query_books(
            &conn,
            "WHERE b.language = ?",
            params![code.trim().to_lowercase()],
        )
    }

    fn count_books_by_language(&self, code: &str) -> Result<u64, LibraryError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM books WHERE language = ?",
            params![code.trim().to_lowercase()],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn clear_books(&self) -> Result<u64, LibraryError> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM books", [])?;
        Ok(deleted as u64)
    }
}
