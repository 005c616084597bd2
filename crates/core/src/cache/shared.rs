//! Lock-guarded cache handle shared between tool calls.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use super::clock::{Clock, SystemClock};
use super::search::{CacheStats, SearchCache};
use crate::SearchResultSet;

/// Cloneable handle to one [`SearchCache`].
///
/// Each operation takes the lock once and releases it before returning, so a
/// caller never holds it across network I/O.
#[derive(Debug)]
pub struct SharedSearchCache<C: Clock = SystemClock> {
    inner: Arc<Mutex<SearchCache<C>>>,
}

impl<C: Clock> Clone for SharedSearchCache<C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl SharedSearchCache {
    pub fn new(ttl: Duration, max_size: usize) -> Self {
        Self::from_cache(SearchCache::new(ttl, max_size))
    }
}

impl<C: Clock> SharedSearchCache<C> {
    pub fn from_cache(cache: SearchCache<C>) -> Self {
        Self { inner: Arc::new(Mutex::new(cache)) }
    }

    pub async fn get(&self, query: &str) -> Option<SearchResultSet> {
        self.inner.lock().await.get(query)
    }

    pub async fn set(&self, query: &str, results: SearchResultSet) {
        self.inner.lock().await.set(query, results);
    }

    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::clock::ManualClock;

    fn results(query: &str) -> SearchResultSet {
        SearchResultSet {
            query: query.to_string(),
            total_results: 1,
            search_time: 0.1,
            results: vec![],
            summary: String::new(),
            cached: false,
        }
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = SharedSearchCache::new(Duration::from_secs(60), 10);
        let other = cache.clone();

        cache.set("Shared Query", results("shared")).await;
        let hit = other.get("shared query").await.unwrap();
        assert!(hit.cached);

        other.clear().await;
        assert_eq!(cache.stats().await.size, 0);
    }

    #[tokio::test]
    async fn test_expiry_through_handle() {
        let clock = ManualClock::new();
        let cache = SharedSearchCache::from_cache(SearchCache::with_clock(Duration::from_secs(5), 10, clock.clone()));

        cache.set("q", results("q")).await;
        clock.advance(Duration::from_secs(6));

        assert!(cache.get("q").await.is_none());
        assert_eq!(cache.stats().await.size, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sets_respect_capacity() {
        let cache = SharedSearchCache::new(Duration::from_secs(60), 8);

        let mut handles = Vec::new();
        for task in 0..16 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..25 {
                    cache.set(&format!("task {task} query {i}"), results("q")).await;
                    assert!(cache.stats().await.size <= 8);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.stats().await.size, 8);
    }
}
