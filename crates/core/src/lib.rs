//! Core types and shared functionality for efficient-search.
//!
//! This crate provides:
//! - In-memory search cache with TTL expiry and insertion-order eviction
//! - Enriched search result types
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod results;

pub use cache::{CacheStats, SearchCache, SharedSearchCache};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use results::{EnrichedResult, ResultMetadata, SearchResultSet};
