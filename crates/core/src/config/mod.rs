//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (EFFICIENT_SEARCH_*)
//! 2. Unprefixed variables (GOOGLE_API_KEY, SEARCH_ENGINE_ID, CACHE_TTL_MINUTES, MAX_RESULTS)
//! 3. TOML config file (if EFFICIENT_SEARCH_CONFIG_FILE set)
//! 4. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Unprefixed variable names accepted for compatibility with existing deployments.
const UNPREFIXED_VARS: &[&str] = &["GOOGLE_API_KEY", "SEARCH_ENGINE_ID", "CACHE_TTL_MINUTES", "MAX_RESULTS"];

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Google API key for the Custom Search JSON API.
    ///
    /// Set via GOOGLE_API_KEY or EFFICIENT_SEARCH_GOOGLE_API_KEY.
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// Programmable Search Engine id (`cx`).
    ///
    /// Set via SEARCH_ENGINE_ID or EFFICIENT_SEARCH_SEARCH_ENGINE_ID.
    #[serde(default)]
    pub search_engine_id: Option<String>,

    /// Custom Search endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Minutes a cached result set stays fresh.
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,

    /// Maximum number of cached queries.
    #[serde(default = "default_cache_max_size")]
    pub cache_max_size: usize,

    /// Result count used when a web_search call omits `num` (1-10).
    #[serde(default = "default_max_results")]
    pub max_results: u8,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://www.googleapis.com/customsearch/v1".into()
}

fn default_cache_ttl_minutes() -> u64 {
    60
}

fn default_cache_max_size() -> usize {
    100
}

fn default_max_results() -> u8 {
    10
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_user_agent() -> String {
    "efficient-search/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            search_engine_id: None,
            base_url: default_base_url(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            cache_max_size: default_cache_max_size(),
            max_results: default_max_results(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache TTL as Duration. Saturates rather than overflowing on unvalidated values.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes.saturating_mul(60))
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment()
            .extract::<Self>()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))
            .and_then(|config| {
                config.validate()?;
                Ok(config)
            })
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("EFFICIENT_SEARCH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(UNPREFIXED_VARS)
                    .map(|key| key.as_str().to_lowercase().into()),
            )
            .merge(
                Env::prefixed("EFFICIENT_SEARCH_")
                    .ignore(&["CONFIG_FILE"])
                    .map(|key| key.as_str().to_lowercase().into()),
            )
    }

    /// Return the API key and engine id, both required before the server can start.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first absent credential.
    pub fn require_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let api_key = self
            .google_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "google_api_key".into(),
                hint: "Set GOOGLE_API_KEY environment variable".into(),
            })?;
        let engine_id = self
            .search_engine_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "search_engine_id".into(),
                hint: "Set SEARCH_ENGINE_ID environment variable".into(),
            })?;
        Ok((api_key, engine_id))
    }
}
