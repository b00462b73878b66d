//! Types for the local book library.

use std::fmt;

use thiserror::Error;

/// Author name used when the catalog credits nobody.
pub const UNKNOWN_AUTHOR: &str = "Desconhecido";

/// Language code used when the catalog lists none.
pub const DEFAULT_LANGUAGE: &str = "pt";

/// A persisted author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Store-assigned identifier.
    pub id: i64,
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl Author {
    /// Whether the author is known to have been alive during `year`.
    ///
    /// Authors missing either year never qualify.
    pub fn alive_in(&self, year: i32) -> bool {
        match (self.birth_year, self.death_year) {
            (Some(birth), Some(death)) => birth <= year && year <= death,
            _ => false,
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match (self.birth_year, self.death_year) {
            (Some(birth), Some(death)) => write!(f, " ({}-{})", birth, death),
            (Some(birth), None) => write!(f, " (b. {})", birth),
            (None, Some(death)) => write!(f, " (d. {})", death),
            (None, None) => Ok(()),
        }
    }
}

/// A persisted book with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Store-assigned identifier.
    pub id: i64,
    pub title: String,
    /// Lowercase language code, e.g. "en".
    pub language: String,
    pub download_count: u64,
    pub author: Author,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} [{}] ({} downloads)",
            self.title, self.author.name, self.language, self.download_count
        )
    }
}

/// An author not yet saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

/// A book not yet saved. The author is supplied when saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub language: String,
    pub download_count: u64,
}

/// Errors for library storage operations.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<rusqlite::Error> for LibraryError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::SqliteFailure(err, msg)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                LibraryError::Constraint(msg.unwrap_or_else(|| err.to_string()))
            }
            other => LibraryError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(birth_year: Option<i32>, death_year: Option<i32>) -> Author {
        Author {
            id: 1,
            name: "Austen, Jane".to_string(),
            birth_year,
            death_year,
        }
    }

    #[test]
    fn test_alive_in_bounds_inclusive() {
        let a = author(Some(1775), Some(1817));
        assert!(a.alive_in(1775));
        assert!(a.alive_in(1800));
        assert!(a.alive_in(1817));
        assert!(!a.alive_in(1774));
        assert!(!a.alive_in(1818));
    }

    #[test]
    fn test_alive_in_requires_both_years() {
        assert!(!author(Some(1800), None).alive_in(1850));
        assert!(!author(None, Some(1900)).alive_in(1850));
        assert!(!author(None, None).alive_in(1850));
    }

    #[test]
    fn test_author_display() {
        assert_eq!(author(Some(1775), Some(1817)).to_string(), "Austen, Jane (1775-1817)");
        assert_eq!(author(None, None).to_string(), "Austen, Jane");
    }

    #[test]
    fn test_book_display() {
        let book = Book {
            id: 3,
            title: "Emma".to_string(),
            language: "en".to_string(),
            download_count: 42,
            author: author(None, None),
        };
        assert_eq!(book.to_string(), "Emma by Austen, Jane [en] (42 downloads)");
    }
}
