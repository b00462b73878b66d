//! Title resolution against the remote catalog.
//!
//! A free-text query is turned into at most one [`CatalogRecord`] by trying,
//! in order:
//!
//! 1. a full-text search with the query as typed,
//! 2. a direct fetch of an ebook number found in the query (bare id or URL),
//! 3. a search with only the first word of the query,
//!
//! and, for the search tiers, picking the best title match among the results.

mod normalize;
mod query;

pub use normalize::normalize;
pub use query::{extract_first_word, extract_id};

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::gutendex::{CatalogClient, CatalogError, CatalogRecord};

/// Which step of the fallback chain produced the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBy {
    /// Search with the full query.
    Search,
    /// Direct fetch by an ebook number extracted from the query.
    DirectId,
    /// Search with the first word of the query.
    Keyword,
}

impl fmt::Display for ResolvedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedBy::Search => write!(f, "title search"),
            ResolvedBy::DirectId => write!(f, "direct id lookup"),
            ResolvedBy::Keyword => write!(f, "keyword search"),
        }
    }
}

/// A record chosen for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub record: CatalogRecord,
    pub resolved_by: ResolvedBy,
}

/// Resolves free-text title queries through the fallback chain.
pub struct Resolver {
    catalog: Arc<dyn CatalogClient>,
}

impl Resolver {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }

    /// Resolve a query, treating catalog failures as "no result".
    ///
    /// Failures are logged and never propagated, so a flaky network cannot
    /// abort the caller.
    pub async fn resolve(&self, title_query: &str) -> Option<Resolution> {
        match self.try_resolve(title_query).await {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!("Catalog lookup for '{}' failed: {}", title_query, e);
                None
            }
        }
    }

    /// Resolve a query, surfacing the first catalog failure.
    ///
    /// `Ok(None)` means every tier came back empty.
    pub async fn try_resolve(
        &self,
        title_query: &str,
    ) -> Result<Option<Resolution>, CatalogError> {
        let results = self.catalog.search(title_query).await?;
        if !results.is_empty() {
            return Ok(best_match(results, title_query).map(|record| Resolution {
                record,
                resolved_by: ResolvedBy::Search,
            }));
        }

        info!("No search results for '{}', trying id lookup", title_query);

        if let Some(id) = extract_id(title_query) {
            info!("Fetching catalog record {} directly", id);
            if let Some(record) = self.catalog.fetch_by_id(&id).await? {
                // A direct id hit is taken as-is, without title matching.
                return Ok(Some(Resolution {
                    record,
                    resolved_by: ResolvedBy::DirectId,
                }));
            }
            info!("No catalog record with id {}", id);
        }

        let keyword = match extract_first_word(title_query) {
            Some(word) if word.to_lowercase() != title_query.to_lowercase() => word,
            _ => return Ok(None),
        };

        info!("Retrying search with keyword '{}'", keyword);

        let results = self.catalog.search(&keyword).await?;
        Ok(best_match(results, title_query).map(|record| Resolution {
            record,
            resolved_by: ResolvedBy::Keyword,
        }))
    }
}

/// Pick the first record whose normalized title contains the normalized query,
/// falling back to the first record (API relevance order).
///
/// Returns `None` only for an empty list.
pub fn best_match(records: Vec<CatalogRecord>, query: &str) -> Option<CatalogRecord> {
    let wanted = normalize(query);
    let position = records.iter().position(|record| {
        record
            .title
            .as_deref()
            .is_some_and(|title| normalize(title).contains(&wanted))
    });

    records.into_iter().nth(position.unwrap_or(0))
}
