//! MCP tool implementations.
//!
//! This module contains all tools exposed by the efficient-search server.

pub mod cache;
pub mod web_search;

pub use cache::{clear_impl, stats_impl};
pub use web_search::{WebSearchParams, search_impl};

use std::sync::Arc;

use esearch_client::SearchProvider;
use esearch_core::SharedSearchCache;

/// Everything a tool call needs, built once at startup.
#[derive(Clone)]
pub struct ToolContext {
    pub cache: SharedSearchCache,
    pub provider: Arc<dyn SearchProvider>,
    /// Result count used when `num` is omitted.
    pub default_num: u8,
}

impl ToolContext {
    pub fn new(cache: SharedSearchCache, provider: Arc<dyn SearchProvider>, default_num: u8) -> Self {
        Self { cache, provider, default_num }
    }
}

/// Text of the first content block of a tool result.
#[cfg(test)]
pub(crate) fn result_text(result: &rmcp::model::CallToolResult) -> String {
    let content_val = serde_json::to_value(&result.content[0]).unwrap();
    content_val
        .get("text")
        .and_then(|v| v.as_str())
        .expect("Expected text field in content")
        .to_string()
}
