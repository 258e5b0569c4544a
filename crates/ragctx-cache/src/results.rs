//! Ranked-chunk cache keyed by query plus search options.
use std::time::Duration;

use ragctx_core::config::CacheConfig;
use ragctx_core::types::{Chunk, SearchOptions};

use crate::bounded::{BoundedCache, CacheStats};
use crate::fingerprint::{result_fingerprint, QueryFingerprint};

/// Holds the retriever's ranked output before compression; compressed
/// results are never stored here.
pub struct ResultCache {
    cache: BoundedCache<QueryFingerprint, Vec<Chunk>>,
}

impl ResultCache {
    pub fn new(config: &CacheConfig) -> Self { Self::with_ttl(config.max_size, config.ttl()) }

    pub fn with_ttl(max_size: usize, ttl: Duration) -> Self { Self { cache: BoundedCache::new(max_size, ttl) } }

    pub fn get(&self, query: &str, options: &SearchOptions) -> Option<Vec<Chunk>> {
        self.cache.get(&result_fingerprint(query, options))
    }

    pub fn set(&self, query: &str, options: &SearchOptions, chunks: Vec<Chunk>) {
        self.cache.set(result_fingerprint(query, options), chunks)
    }

    pub fn has(&self, query: &str, options: &SearchOptions) -> bool { self.cache.has(&result_fingerprint(query, options)) }

    pub fn clear(&self) { self.cache.clear() }

    pub fn stats(&self) -> CacheStats { self.cache.stats() }
}

impl Default for ResultCache {
    fn default() -> Self { Self::new(&CacheConfig::result_defaults()) }
}
