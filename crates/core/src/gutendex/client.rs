//! Gutendex HTTP client.
//!
//! Gutendex needs no API key. Requests carry a bounded timeout and are never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::types::{CatalogRecord, SearchPage};
use super::{CatalogClient, CatalogError};
use crate::config::CatalogConfig;

/// Gutendex API client.
pub struct GutendexClient {
    client: Client,
    base_url: String,
}

impl GutendexClient {
    /// Create a new client from the `[catalog]` configuration section.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogError::NotConfigured(
                "catalog base URL is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The `/books` endpoint URL.
    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    async fn error_from(response: reqwest::Response) -> CatalogError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        CatalogError::ApiError { status, message }
    }
}

#[async_trait]
impl CatalogClient for GutendexClient {
    async fn search(&self, term: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
        let url = self.books_url();

        debug!("Gutendex search: url='{}', search='{}'", url, term);

        let response = self
            .client
            .get(&url)
            .query(&[("search", term)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let page: SearchPage = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse search response: {}", e))
        })?;

        debug!(
            "Gutendex search '{}': {} total matches, {} on first page",
            term,
            page.count,
            page.results.len()
        );

        Ok(page.results)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<CatalogRecord>, CatalogError> {
        let url = format!("{}/{}", self.books_url(), id);

        debug!("Gutendex get book: url='{}'", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Gutendex book {} not found", id);
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let record: CatalogRecord = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse book response: {}", e))
        })?;

        Ok(Some(record))
    }
}
