//! In-memory caches for query embeddings and retrieval results.
//!
//! Both caches are instances of [`BoundedCache`]: LRU eviction by entry count
//! plus a TTL measured from last access. Instances are constructed by their
//! owner and passed where needed; there is no process-wide cache.
pub mod bounded;
pub mod embedding;
pub mod fingerprint;
pub mod results;

pub use bounded::{BoundedCache, CacheEntry, CacheStats};
pub use embedding::{CachedEmbedder, EmbeddingCache};
pub use fingerprint::{fingerprint, normalize_query, result_fingerprint, QueryFingerprint};
pub use results::ResultCache;
