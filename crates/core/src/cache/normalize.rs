//! Cache key normalization.

/// Canonicalize a raw query into a cache key.
///
/// Lowercases, trims, and collapses every whitespace run to a single ASCII space.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}
