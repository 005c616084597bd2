//! Google search client error types.

use std::sync::Arc;

/// Errors from the Google Custom Search JSON API client.
#[derive(Debug, thiserror::Error)]
pub enum GoogleError {
    /// Missing API key.
    #[error("missing API key: GOOGLE_API_KEY not set")]
    MissingApiKey,

    /// Missing Programmable Search Engine id.
    #[error("missing search engine id: SEARCH_ENGINE_ID not set")]
    MissingEngineId,

    /// Base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid num parameter (must be 1-10).
    #[error("invalid num: must be 1-10")]
    InvalidNum,

    /// Invalid start parameter (must be 1-91).
    #[error("invalid start: must be 1-91")]
    InvalidStart,

    /// Unknown safe search level.
    #[error("invalid safe: {0} (expected off, medium, or high)")]
    InvalidSafeSearch(String),

    /// Non-success response, with the message the API gave.
    #[error("Google Search API error: {message}")]
    Api { status: u16, message: String },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GoogleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { GoogleError::Timeout } else { GoogleError::Network(Arc::new(err)) }
    }
}
