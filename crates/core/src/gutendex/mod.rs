//! Remote book catalog integration (Gutendex, a JSON front end to Project Gutenberg).
//!
//! The resolver only sees the [`CatalogClient`] trait, so the HTTP client can be
//! swapped for [`crate::testing::MockCatalogClient`] in tests.

mod client;
mod types;

pub use client::GutendexClient;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (bad base URL, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Read access to the remote catalog.
///
/// An empty result is never an error: `search` returns an empty list and
/// `fetch_by_id` returns `None` when the id does not exist.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Full-text search over titles and author names, first page only.
    async fn search(&self, term: &str) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// Fetch one record by its ebook number.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<CatalogRecord>, CatalogError>;
}
