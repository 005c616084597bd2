//! Enrichment of raw search responses.
//!
//! Turns a [`GoogleSearchResponse`] into a [`SearchResultSet`]: cleaned text,
//! position-based relevance, pagemap metadata, and a summary line. Provider
//! order is kept. Malformed optional data degrades to absent fields.

mod summary;
mod text;

pub use summary::{format_thousands, generate_summary};
pub use text::{clean_snippet, clean_title};

use esearch_core::{EnrichedResult, ResultMetadata, SearchResultSet};
use serde_json::Value;

use crate::google::{GoogleSearchItem, GoogleSearchResponse};

/// Build a result set for `query` from a raw provider response.
///
/// The returned set always has `cached = false`.
pub fn enrich_results(query: &str, response: &GoogleSearchResponse) -> SearchResultSet {
    let total = response.items.len();
    let results: Vec<EnrichedResult> = response
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| enrich_item(item, index, total))
        .collect();

    let total_results = summary::parse_total_results(&response.search_information.total_results);

    SearchResultSet {
        query: query.to_string(),
        total_results,
        search_time: response.search_information.search_time,
        summary: generate_summary(query, &results, total_results),
        results,
        cached: false,
    }
}

fn enrich_item(item: &GoogleSearchItem, index: usize, total: usize) -> EnrichedResult {
    EnrichedResult {
        title: clean_title(&item.title),
        url: item.link.clone(),
        snippet: clean_snippet(&item.snippet),
        display_url: item.display_link.clone(),
        relevance: 1.0 - index as f64 / total as f64,
        metadata: extract_metadata(item),
    }
}

fn extract_metadata(item: &GoogleSearchItem) -> ResultMetadata {
    let tags = item.metatags();
    let tag = |names: &[&str]| -> Option<String> {
        let tags = tags?;
        names
            .iter()
            .find_map(|name| tags.get(*name).and_then(Value::as_str).filter(|v| !v.is_empty()))
            .map(str::to_string)
    };

    ResultMetadata {
        description: tag(&["og:description", "description"]),
        author: tag(&["author", "article:author"]),
        published_date: tag(&["article:published_time", "datePublished"]),
        thumbnail: item.thumbnail().map(str::to_string),
        site_name: tag(&["og:site_name"]).or_else(|| Some(item.display_link.clone()).filter(|d| !d.is_empty())),
    }
}
