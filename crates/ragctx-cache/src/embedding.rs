//! Query-embedding cache and the caching embedder decorator.
use std::time::Duration;
use tracing::{debug, warn};

use ragctx_core::config::CacheConfig;
use ragctx_core::error::Error;
use ragctx_core::traits::Embedder;

use crate::bounded::{BoundedCache, CacheStats};
use crate::fingerprint::{fingerprint, QueryFingerprint};

/// Embedding vectors keyed by query fingerprint.
pub struct EmbeddingCache {
    cache: BoundedCache<QueryFingerprint, Vec<f32>>,
}

impl EmbeddingCache {
    pub fn new(config: &CacheConfig) -> Self { Self::with_ttl(config.max_size, config.ttl()) }

    pub fn with_ttl(max_size: usize, ttl: Duration) -> Self { Self { cache: BoundedCache::new(max_size, ttl) } }

    pub fn get(&self, query: &str) -> Option<Vec<f32>> { self.cache.get(&fingerprint(query)) }

    pub fn set(&self, query: &str, embedding: Vec<f32>) { self.cache.set(fingerprint(query), embedding) }

    pub fn has(&self, query: &str) -> bool { self.cache.has(&fingerprint(query)) }

    pub fn clear(&self) { self.cache.clear() }

    pub fn stats(&self) -> CacheStats { self.cache.stats() }
}

impl Default for EmbeddingCache {
    fn default() -> Self { Self::new(&CacheConfig::embedding_defaults()) }
}

/// Wraps an embedder so repeated (normalization-equal) queries are embedded once.
/// Failures surface as [`Error::Embedding`] and are never cached.
pub struct CachedEmbedder<E: Embedder> {
    inner: E,
    cache: EmbeddingCache,
}

impl<E: Embedder> CachedEmbedder<E> {
    pub fn new(inner: E, cache: EmbeddingCache) -> Self { Self { inner, cache } }

    pub fn cache(&self) -> &EmbeddingCache { &self.cache }

    pub fn inner(&self) -> &E { &self.inner }
}

impl<E: Embedder> Embedder for CachedEmbedder<E> {
    fn dim(&self) -> usize { self.inner.dim() }

    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        if let Some(hit) = self.cache.get(text) {
            debug!(dim = hit.len(), "embedding cache hit");
            return Ok(hit);
        }
        let embedding = self.inner.embed(text).map_err(|e| {
            let message = format!("{e:#}");
            warn!(error = %message, "embedding failed");
            Error::Embedding(message)
        })?;
        self.cache.set(text, embedding.clone());
        Ok(embedding)
    }
}
