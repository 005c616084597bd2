//! Enriched search result types.
//!
//! These are the shapes handed back to tool callers and stored in the cache.
//! Field names serialize in camelCase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A complete, display-ready answer to one search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultSet {
    /// The query as the caller typed it.
    pub query: String,
    /// Provider's estimate of the total number of matches.
    pub total_results: u64,
    /// Provider-side search time in seconds.
    pub search_time: f64,
    /// Results in provider rank order.
    pub results: Vec<EnrichedResult>,
    /// One-line summary for the model.
    pub summary: String,
    /// Whether this answer came from the cache.
    pub cached: bool,
}

/// A single cleaned and scored search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub display_url: String,
    /// Position-derived score in [0, 1]; non-increasing by rank.
    pub relevance: f64,
    pub metadata: ResultMetadata,
}

/// Optional page metadata lifted from the provider's pagemap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl SearchResultSet {
    /// Copy of this result set marked as served from cache.
    pub fn as_cached(&self) -> Self {
        Self { cached: true, ..self.clone() }
    }
}
