//! In-memory cache for enriched search results.
//!
//! This module provides a bounded, single-process cache keyed by normalized
//! query text. It supports:
//!
//! - Query normalization (case, surrounding and repeated whitespace)
//! - TTL expiry, checked lazily on read
//! - Oldest-inserted-first eviction when full
//! - A lock-guarded handle for sharing across concurrent tool calls

pub mod clock;
pub mod normalize;
pub mod search;
pub mod shared;

pub use clock::{Clock, SystemClock};
pub use normalize::normalize_query;
pub use search::{CacheStats, SearchCache};
pub use shared::SharedSearchCache;
