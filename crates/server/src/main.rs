//! efficient-search server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use esearch_client::{GoogleClient, GoogleConfig};
use esearch_core::{AppConfig, SharedSearchCache};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let (api_key, search_engine_id) = config.require_credentials()?;

    let client = GoogleClient::new(GoogleConfig {
        api_key: api_key.to_string(),
        search_engine_id: search_engine_id.to_string(),
        base_url: config.base_url.clone(),
        timeout: config.timeout(),
        user_agent: config.user_agent.clone(),
    })?;

    let cache = SharedSearchCache::new(config.cache_ttl(), config.cache_max_size);
    let ctx = tools::ToolContext::new(cache, Arc::new(client), config.max_results);

    tracing::info!(
        cache_ttl_minutes = config.cache_ttl_minutes,
        cache_max_size = config.cache_max_size,
        max_results = config.max_results,
        "Starting efficient-search server on stdio transport"
    );

    let handler = handler::EfficientSearchServer::new(ctx);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
