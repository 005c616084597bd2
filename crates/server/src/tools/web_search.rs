//! web_search tool implementation.
//!
//! Checks the cache, and on a miss queries the provider, enriches the
//! response, and caches it.

use esearch_client::{SafeSearch, SearchRequest, enrich_results};
use esearch_core::{Error, SearchResultSet};
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolContext;
use crate::error::json_result;

/// Input parameters for web_search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// Search query (required).
    #[serde(default)]
    pub query: String,

    /// Number of results to return (1-10, default: 10).
    ///
    /// Any JSON number is accepted here and range-checked later, so bad values
    /// produce an INVALID_INPUT payload rather than a parameter parse error.
    #[serde(default)]
    pub num: Option<f64>,

    /// Safe search level: off, medium, or high.
    #[serde(default)]
    pub safe: Option<String>,

    /// Geolocation (country code, e.g., "us", "in").
    #[serde(default)]
    pub gl: Option<String>,

    /// Language restriction (e.g., "lang_en", "lang_hi").
    #[serde(default)]
    pub lr: Option<String>,
}

/// Implementation of the web_search tool.
pub async fn search_impl(ctx: &ToolContext, params: WebSearchParams) -> Result<CallToolResult, Error> {
    let results = search(ctx, params).await?;
    json_result(&results)
}

/// Answer a query from the cache or, failing that, from the provider.
pub async fn search(ctx: &ToolContext, params: WebSearchParams) -> Result<SearchResultSet, Error> {
    let request = build_request(ctx, params)?;

    if let Some(cached) = ctx.cache.get(&request.q).await {
        tracing::debug!("cache hit for search query: {}", request.q);
        return Ok(cached);
    }

    tracing::debug!("cache miss for search query: {}", request.q);
    let query = request.q.clone();
    let response = ctx
        .provider
        .search(request)
        .await
        .map_err(|e| Error::Provider(e.to_string()))?;

    let enriched = enrich_results(&query, &response);
    ctx.cache.set(&query, enriched.clone()).await;

    Ok(enriched)
}

/// Validate tool input and turn it into a provider request.
fn build_request(ctx: &ToolContext, params: WebSearchParams) -> Result<SearchRequest, Error> {
    if params.query.trim().is_empty() {
        return Err(Error::InvalidInput("query is required".into()));
    }

    let num = match params.num {
        None => ctx.default_num,
        Some(n) if n.fract() == 0.0 && (1.0..=10.0).contains(&n) => n as u8,
        Some(n) => return Err(Error::InvalidInput(format!("num must be between 1 and 10, got {n}"))),
    };

    let safe = params
        .safe
        .as_deref()
        .map(str::parse::<SafeSearch>)
        .transpose()
        .map_err(|e| Error::InvalidInput(e.to_string()))?;

    Ok(SearchRequest {
        q: params.query,
        num: Some(num),
        start: None,
        safe,
        gl: params.gl.filter(|g| !g.is_empty()),
        lr: params.lr.filter(|l| !l.is_empty()),
    })
}
