//! Capacity- and age-bounded cache shared by the embedding and result caches.
//!
//! Entries are evicted least-recently-used when the cache is full and are
//! treated as absent once they have not been read for longer than the TTL.
//! A successful `get` refreshes both the LRU position and the TTL clock.
use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    pub key: K,
    pub value: V,
    pub inserted_at: Instant,
    pub last_accessed_at: Instant,
}

impl<K, V> CacheEntry<K, V> {
    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.last_accessed_at) > ttl
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub hit_rate: f64,
    pub evictions: u64,
    pub expirations: u64,
}

struct Inner<K: Hash + Eq, V> {
    entries: LruCache<K, CacheEntry<K, V>>,
    hits: u64,
    misses: u64,
    evictions: u64,
    expirations: u64,
}

/// Thread-safe LRU cache with time-to-live measured from last access.
///
/// Every operation takes the lock once; check-then-act sequences across
/// calls are not atomic.
pub struct BoundedCache<K: Hash + Eq, V> {
    inner: Mutex<Inner<K, V>>,
    ttl: Duration,
}

impl<K, V> BoundedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// A `max_size` of zero is clamped to one entry.
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner { entries: LruCache::new(capacity), hits: 0, misses: 0, evictions: 0, expirations: 0 }),
            ttl,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let mut inner = self.inner.lock();
        let expired = match inner.entries.get_mut(key) {
            Some(entry) if !entry.is_expired(self.ttl, now) => {
                entry.last_accessed_at = now;
                let value = entry.value.clone();
                inner.hits += 1;
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            inner.entries.pop(key);
            inner.expirations += 1;
        }
        inner.misses += 1;
        None
    }

    /// Inserts or overwrites `key`, evicting the least-recently-used entry when full.
    pub fn set(&self, key: K, value: V) {
        let now = Instant::now();
        let entry = CacheEntry { key: key.clone(), value, inserted_at: now, last_accessed_at: now };
        let mut inner = self.inner.lock();
        if let Some((evicted, _)) = inner.entries.push(key.clone(), entry) {
            if evicted != key {
                inner.evictions += 1;
            }
        }
    }

    /// Presence check that leaves recency and hit/miss counters untouched.
    pub fn has(&self, key: &K) -> bool {
        let now = Instant::now();
        let inner = self.inner.lock();
        inner.entries.peek(key).is_some_and(|entry| !entry.is_expired(self.ttl, now))
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().entries.pop(key).map(|entry| entry.value)
    }

    /// Physically drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut inner = self.inner.lock();
        let stale: Vec<K> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl, now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            inner.entries.pop(key);
        }
        inner.expirations += stale.len() as u64;
        stale.len()
    }

    /// Drops all entries and resets the counters.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.hits = 0;
        inner.misses = 0;
        inner.evictions = 0;
        inner.expirations = 0;
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        let lookups = inner.hits + inner.misses;
        let hit_rate = if lookups == 0 { 0.0 } else { inner.hits as f64 / lookups as f64 };
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            size: inner.entries.len(),
            hit_rate,
            evictions: inner.evictions,
            expirations: inner.expirations,
        }
    }

    /// Physical entry count, including entries that have expired but not been purged.
    pub fn len(&self) -> usize { self.inner.lock().entries.len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn capacity(&self) -> usize { self.inner.lock().entries.cap().get() }

    pub fn ttl(&self) -> Duration { self.ttl }
}
