//! Types for Gutendex API responses.
//!
//! Unknown fields are ignored so new API fields never break decoding.
//! Optional numeric fields that arrive malformed decode as absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One page of `GET /books?search=...` results.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchPage {
    /// Total number of matches across all pages.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, unused beyond logging.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Records on this page, in API relevance order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<CatalogRecord>,
}

/// A single book entry as returned by the catalog.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogRecord {
    /// Project Gutenberg ebook number.
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    /// Language codes, most relevant first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub download_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<CatalogAuthor>,
    /// Format MIME type to download URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summaries: Vec<String>,
}

/// A person credited on a catalog record.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub birth_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub death_year: Option<i32>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts integers and numeric strings, maps anything else to `None`.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(raw.and_then(|n| T::try_from(n).ok()))
}
