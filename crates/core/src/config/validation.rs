//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Longest accepted cache TTL: one year.
pub const MAX_CACHE_TTL_MINUTES: u64 = 365 * 24 * 60;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `cache_ttl_minutes` or `cache_max_size` is 0
    /// - `cache_ttl_minutes` exceeds one year
    /// - `max_results` is outside 1-10
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` or `base_url` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_minutes == 0 {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_minutes".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if self.cache_ttl_minutes > MAX_CACHE_TTL_MINUTES {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_minutes".into(),
                reason: format!("must not exceed one year ({MAX_CACHE_TTL_MINUTES} minutes)"),
            });
        }

        if self.cache_max_size == 0 {
            return Err(ConfigError::Invalid { field: "cache_max_size".into(), reason: "must be greater than 0".into() });
        }

        if !(1..=10).contains(&self.max_results) {
            return Err(ConfigError::Invalid { field: "max_results".into(), reason: "must be between 1 and 10".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.base_url.is_empty() {
            return Err(ConfigError::Invalid { field: "base_url".into(), reason: "must not be empty".into() });
        }

        if self.cache_ttl_minutes > 24 * 60 {
            tracing::warn!(
                cache_ttl_minutes = self.cache_ttl_minutes,
                "cache TTL exceeds one day; results may be served long after they change upstream"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ttl_zero() {
        let config = AppConfig { cache_ttl_minutes: 0, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "cache_ttl_minutes"));
    }

    #[test]
    fn test_validate_ttl_upper_bound() {
        let config = AppConfig { cache_ttl_minutes: MAX_CACHE_TTL_MINUTES, ..Default::default() };
        assert!(config.validate().is_ok());

        for cache_ttl_minutes in [MAX_CACHE_TTL_MINUTES + 1, u64::MAX / 120, u64::MAX] {
            let config = AppConfig { cache_ttl_minutes, ..Default::default() };
            let result = config.validate();
            assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "cache_ttl_minutes"));
        }
    }

    #[test]
    fn test_validate_max_size_zero() {
        let config = AppConfig { cache_max_size: 0, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "cache_max_size"));
    }

    #[test]
    fn test_validate_max_results_bounds() {
        for max_results in [0, 11] {
            let config = AppConfig { max_results, ..Default::default() };
            let result = config.validate();
            assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "max_results"));
        }
    }

    #[test]
    fn test_validate_timeout_too_small() {
        let config = AppConfig { timeout_ms: 50, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_timeout_exceeds_limit() {
        let config = AppConfig { timeout_ms: 301_000, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let config = AppConfig { user_agent: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "user_agent"));
    }

    #[test]
    fn test_validate_edge_case_values() {
        let config =
            AppConfig { cache_ttl_minutes: 1, cache_max_size: 1, max_results: 1, timeout_ms: 100, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
