//! Google Programmable Search client.
//!
//! Wraps the Custom Search JSON API.
//!
//! - **Endpoint**: `https://www.googleapis.com/customsearch/v1`
//! - **Authentication**: `key` (API key) and `cx` (engine id) query parameters.
//! - **Errors**: non-success statuses surface the API's own `error.message`,
//!   falling back to the HTTP reason phrase. Nothing is retried here.

pub mod error;
pub mod request;
pub mod response;

pub use error::GoogleError;
pub use request::{SafeSearch, SearchRequest};
pub use response::{GoogleSearchItem, GoogleSearchResponse, ImageRef, PageMap, SearchInformation};

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{StatusCode, header};

/// Default base URL for the Custom Search JSON API.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "efficient-search/0.1";

/// Anything that can answer a search request with a raw provider response.
///
/// The tool dispatcher depends on this rather than on [`GoogleClient`] directly.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, req: SearchRequest) -> Result<GoogleSearchResponse, GoogleError>;
}

/// Google client configuration.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
    pub search_engine_id: String,
    /// Base URL (default: https://www.googleapis.com/customsearch/v1).
    pub base_url: String,
    /// Request timeout (default: 20s).
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_engine_id: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Custom Search JSON API client.
#[derive(Debug, Clone)]
pub struct GoogleClient {
    http: reqwest::Client,
    config: GoogleConfig,
}

impl GoogleClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        if config.api_key.is_empty() {
            return Err(GoogleError::MissingApiKey);
        }
        if config.search_engine_id.is_empty() {
            return Err(GoogleError::MissingEngineId);
        }
        url::Url::parse(&config.base_url).map_err(|e| GoogleError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GoogleError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Execute a search query.
    pub async fn search(&self, req: SearchRequest) -> Result<GoogleSearchResponse, GoogleError> {
        req.validate()?;

        let start = Instant::now();
        tracing::debug!(query = %req.q, num = req.get_num(), "searching Google Custom Search");

        let http_response = self
            .http
            .get(&self.config.base_url)
            .header(header::ACCEPT, "application/json")
            .query(&[("key", self.config.api_key.as_str()), ("cx", self.config.search_engine_id.as_str())])
            .query(&req)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Google API response status: {}", status);

        let bytes = http_response.bytes().await?;

        if !status.is_success() {
            return Err(GoogleError::Api { status: status.as_u16(), message: api_error_message(status, &bytes) });
        }

        let response: GoogleSearchResponse =
            serde_json::from_slice(&bytes).map_err(|e| GoogleError::Parse(e.to_string()))?;

        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), response.items.len());

        Ok(response)
    }
}

#[async_trait]
impl SearchProvider for GoogleClient {
    async fn search(&self, req: SearchRequest) -> Result<GoogleSearchResponse, GoogleError> {
        GoogleClient::search(self, req).await
    }
}

/// Pull `error.message` out of an API error body, falling back to the status reason.
fn api_error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<response::ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or(status.as_str()).to_string())
}
