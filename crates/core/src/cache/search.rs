//! Search result cache.
//!
//! Entries live in a hash map; a separate queue records insertion order so
//! the oldest entry can be found without scanning the map. Each entry holds
//! the sequence number it was inserted with, and queue slots whose sequence
//! no longer matches a live entry are stale and skipped.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use super::normalize::normalize_query;
use crate::SearchResultSet;

/// Default time-to-live for cached result sets.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Default maximum number of cached queries.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Cache occupancy snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Entries currently held, including expired ones not yet read.
    pub size: usize,
    pub max_size: usize,
    pub ttl_minutes: f64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    results: SearchResultSet,
    created_at: Instant,
    /// `None` when the TTL reaches past what `Instant` can represent.
    expires_at: Option<Instant>,
    seq: u64,
}

/// Bounded TTL cache keyed by normalized query.
#[derive(Debug)]
pub struct SearchCache<C: Clock = SystemClock> {
    entries: HashMap<String, CacheEntry>,
    order: VecDeque<(u64, String)>,
    next_seq: u64,
    ttl: Duration,
    max_size: usize,
    clock: C,
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_MAX_SIZE)
    }
}

impl SearchCache {
    /// Create a cache using the system clock.
    pub fn new(ttl: Duration, max_size: usize) -> Self {
        Self::with_clock(ttl, max_size, SystemClock)
    }
}

impl<C: Clock> SearchCache<C> {
    /// Create a cache reading time from `clock`.
    pub fn with_clock(ttl: Duration, max_size: usize, clock: C) -> Self {
        Self {
            entries: HashMap::with_capacity(max_size),
            order: VecDeque::with_capacity(max_size),
            next_seq: 0,
            ttl,
            max_size,
            clock,
        }
    }

    /// Look up a query.
    ///
    /// Returns a copy flagged `cached = true`, or `None` when the key is unknown
    /// or its entry has expired. Expired entries are removed here.
    pub fn get(&mut self, query: &str) -> Option<SearchResultSet> {
        let key = normalize_query(query);
        let entry = self.entries.get(&key)?;
        let now = self.clock.now();

        if entry.expires_at.is_some_and(|at| now > at) {
            tracing::debug!(key = %key, "cache entry expired");
            self.entries.remove(&key);
            self.compact_order();
            return None;
        }

        tracing::debug!(key = %key, age_secs = now.duration_since(entry.created_at).as_secs(), "cache hit");
        Some(entry.results.as_cached())
    }

    /// Store a result set under the normalized query.
    ///
    /// A new key arriving at capacity evicts the oldest-inserted entry first.
    /// An existing key is overwritten in place: its expiry restarts but its
    /// eviction position does not change.
    pub fn set(&mut self, query: &str, results: SearchResultSet) {
        if self.max_size == 0 {
            return;
        }

        let key = normalize_query(query);
        let now = self.clock.now();
        let expires_at = now.checked_add(self.ttl);

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.results = results;
            entry.created_at = now;
            entry.expires_at = expires_at;
            return;
        }

        if self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.push_back((seq, key.clone()));
        self.entries.insert(key, CacheEntry { results, created_at: now, expires_at, seq });
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats { size: self.entries.len(), max_size: self.max_size, ttl_minutes: self.ttl.as_secs_f64() / 60.0 }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_live(&self, seq: u64, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.seq == seq)
    }

    fn evict_oldest(&mut self) {
        while let Some((seq, key)) = self.order.pop_front() {
            if self.is_live(seq, &key) {
                tracing::debug!(key = %key, "evicting oldest cache entry");
                self.entries.remove(&key);
                return;
            }
        }
    }

    /// Drop stale queue slots once they outnumber live entries.
    fn compact_order(&mut self) {
        if self.order.len() <= self.entries.len() * 2 + 1 {
            return;
        }
        let entries = &self.entries;
        self.order
            .retain(|(seq, key)| entries.get(key).is_some_and(|e| e.seq == *seq));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::clock::ManualClock;

    fn results(query: &str) -> SearchResultSet {
        SearchResultSet {
            query: query.to_string(),
            total_results: 100,
            search_time: 0.5,
            results: vec![],
            summary: "Test summary".to_string(),
            cached: false,
        }
    }

    fn manual_cache(ttl: Duration, max_size: usize) -> (SearchCache<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (SearchCache::with_clock(ttl, max_size, clock.clone()), clock)
    }

    #[test]
    fn test_set_and_get() {
        let mut cache: SearchCache = SearchCache::default();
        cache.set("test", results("test"));

        let cached = cache.get("test").unwrap();
        assert_eq!(cached.query, "test");
        assert!(cached.cached);
        assert_eq!(cached, SearchResultSet { cached: true, ..results("test") });
    }

    #[test]
    fn test_get_missing() {
        let mut cache: SearchCache = SearchCache::default();
        assert!(cache.get("never inserted").is_none());
    }

    #[test]
    fn test_normalized_lookup() {
        let mut cache: SearchCache = SearchCache::default();
        cache.set("TEST  QUERY", results("test"));

        let cached = cache.get("  test query ").unwrap();
        assert_eq!(cached.query, "test");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_stored_copy_not_flagged() {
        let mut cache: SearchCache = SearchCache::default();
        cache.set("q", results("q"));
        assert!(cache.get("q").unwrap().cached);
        assert!(!cache.entries["q"].results.cached);
    }

    #[test]
    fn test_ttl_expiry_is_lazy() {
        let (mut cache, clock) = manual_cache(Duration::from_secs(60), 10);
        cache.set("test", results("test"));

        clock.advance(Duration::from_secs(60));
        assert!(cache.get("test").is_some(), "entry is fresh until now passes expires_at");

        clock.advance(Duration::from_millis(1));
        assert_eq!(cache.stats().size, 1, "expired entries count until read");
        assert!(cache.get("test").is_none());
        assert_eq!(cache.stats().size, 0);
    }

    #[test]
    fn test_zero_ttl() {
        let (mut cache, clock) = manual_cache(Duration::ZERO, 10);
        cache.set("q", results("q"));
        assert!(cache.get("q").is_some());
        clock.advance(Duration::from_millis(1));
        assert!(cache.get("q").is_none());
    }

    #[test]
    fn test_unrepresentable_ttl_never_expires() {
        let (mut cache, clock) = manual_cache(Duration::MAX, 10);
        cache.set("q", results("q"));
        clock.advance(Duration::from_secs(365 * 24 * 60 * 60));
        assert!(cache.get("q").is_some());
        assert_eq!(cache.stats().size, 1);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut cache = SearchCache::new(DEFAULT_TTL, 2);
        cache.set("query1", results("query1"));
        cache.set("query2", results("query2"));
        cache.set("query3", results("query3"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("query1").is_none());
        assert!(cache.get("query2").is_some());
        assert!(cache.get("query3").is_some());
    }

    #[test]
    fn test_max_size_plus_one() {
        let max_size = 5;
        let mut cache = SearchCache::new(DEFAULT_TTL, max_size);
        for i in 0..=max_size {
            cache.set(&format!("query {i}"), results("q"));
        }

        assert_eq!(cache.stats().size, max_size);
        assert!(cache.get("query 0").is_none());
        for i in 1..=max_size {
            assert!(cache.get(&format!("query {i}")).is_some());
        }
    }

    #[test]
    fn test_overwrite_at_capacity_does_not_evict() {
        let mut cache = SearchCache::new(DEFAULT_TTL, 2);
        cache.set("a", results("a1"));
        cache.set("b", results("b"));
        cache.set("A", results("a2"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").unwrap().query, "a2");
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn test_overwrite_keeps_eviction_position() {
        let mut cache = SearchCache::new(DEFAULT_TTL, 2);
        cache.set("a", results("a"));
        cache.set("b", results("b"));
        cache.set("a", results("a again"));
        cache.set("c", results("c"));

        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_overwrite_restarts_ttl() {
        let (mut cache, clock) = manual_cache(Duration::from_secs(10), 10);
        cache.set("q", results("old"));
        clock.advance(Duration::from_secs(8));
        cache.set("q", results("new"));
        clock.advance(Duration::from_secs(8));

        assert_eq!(cache.get("q").unwrap().query, "new");
    }

    #[test]
    fn test_eviction_skips_expired_and_removed_slots() {
        let (mut cache, clock) = manual_cache(Duration::from_secs(10), 2);
        cache.set("old", results("old"));
        clock.advance(Duration::from_secs(11));
        assert!(cache.get("old").is_none());

        cache.set("old", results("old again"));
        cache.set("b", results("b"));
        cache.set("c", results("c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("old").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_order_queue_stays_bounded() {
        let (mut cache, clock) = manual_cache(Duration::from_secs(1), 100);
        for _ in 0..1_000 {
            cache.set("churn", results("churn"));
            clock.advance(Duration::from_secs(2));
            assert!(cache.get("churn").is_none());
        }
        assert!(cache.order.len() <= 2);
    }

    #[test]
    fn test_clear() {
        let mut cache: SearchCache = SearchCache::default();
        cache.set("one", results("one"));
        cache.set("two", results("two"));
        cache.clear();

        assert!(cache.get("one").is_none());
        assert!(cache.get("two").is_none());
        assert_eq!(cache.stats().size, 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_stats() {
        let cache = SearchCache::new(Duration::from_secs(30 * 60), 50);
        let stats = cache.stats();
        assert_eq!(stats.ttl_minutes, 30.0);
        assert_eq!(stats.max_size, 50);
        assert_eq!(stats.size, 0);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["maxSize"], 50);
        assert_eq!(value["ttlMinutes"], 30.0);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut cache = SearchCache::new(DEFAULT_TTL, 0);
        cache.set("q", results("q"));
        assert_eq!(cache.len(), 0);
        assert!(cache.get("q").is_none());
    }
}
