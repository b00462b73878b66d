//! Mock remote catalog for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::gutendex::{CatalogClient, CatalogError, CatalogRecord};

/// A recorded catalog call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCatalogQuery {
    Search { term: String },
    FetchById { id: String },
}

/// Mock implementation of the [`CatalogClient`] trait.
///
/// Provides controllable behavior for testing:
/// - Scripted search results per exact search term (anything else is empty)
/// - Records served by id for direct lookups
/// - Call recording for assertions
/// - One-shot failure injection
#[derive(Debug, Default)]
pub struct MockCatalogClient {
    /// Search results keyed by exact term.
    searches: Arc<RwLock<HashMap<String, Vec<CatalogRecord>>>>,
    /// Records by ebook number.
    records: Arc<RwLock<HashMap<String, CatalogRecord>>>,
    /// Recorded calls.
    queries: Arc<RwLock<Vec<RecordedCatalogQuery>>>,
    /// If set, the next call will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl MockCatalogClient {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Results returned when `search` is called with exactly `term`.
    pub async fn set_search_results(&self, term: &str, results: Vec<CatalogRecord>) {
        self.searches.write().await.insert(term.to_string(), results);
    }

    /// Serve `record` from `fetch_by_id` under its own id.
    pub async fn add_record(&self, record: CatalogRecord) {
        self.records
            .write()
            .await
            .insert(record.id.to_string(), record);
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded calls, oldest first.
    pub async fn recorded_queries(&self) -> Vec<RecordedCatalogQuery> {
        self.queries.read().await.clone()
    }

    /// Get the number of calls performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    async fn record(&self, query: RecordedCatalogQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn search(&self, term: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.record(RecordedCatalogQuery::Search {
            term: term.to_string(),
        })
        .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(self
            .searches
            .read()
            .await
            .get(term)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<CatalogRecord>, CatalogError> {
        self.record(RecordedCatalogQuery::FetchById { id: id.to_string() })
            .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(self.records.read().await.get(id).cloned())
    }
}
