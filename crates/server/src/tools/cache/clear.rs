//! clear_cache tool implementation.
//!
//! Drops every cached result set.

use esearch_core::{Error, SharedSearchCache};
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::json_result;

/// Output from the clear_cache tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClearCacheOutput {
    pub success: bool,
    pub message: String,
}

/// Implementation of the clear_cache tool.
pub async fn clear_impl(cache: &SharedSearchCache) -> Result<CallToolResult, Error> {
    cache.clear().await;
    tracing::info!("search cache cleared");

    json_result(&ClearCacheOutput { success: true, message: "Cache cleared".into() })
}
