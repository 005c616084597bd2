//! get_cache_stats tool implementation.

use esearch_core::{Error, SharedSearchCache};
use rmcp::model::CallToolResult;

use crate::error::json_result;

/// Implementation of the get_cache_stats tool.
pub async fn stats_impl(cache: &SharedSearchCache) -> Result<CallToolResult, Error> {
    json_result(&cache.stats().await)
}
