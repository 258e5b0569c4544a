//! Query normalization and cache-key derivation.
//!
//! Keys are the hex form of a 128-bit XXH3 hash. They are map keys only and
//! are not a security boundary.
use serde::{Deserialize, Serialize};
use std::fmt;
use twox_hash::xxh3::hash128;

use ragctx_core::types::SearchOptions;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueryFingerprint(String);

impl QueryFingerprint {
    fn of(normalized: &str) -> Self { Self(format!("{:032x}", hash128(normalized.as_bytes()))) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for QueryFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Lowercases, trims and collapses internal whitespace runs to one space.
pub fn normalize_query(query: &str) -> String {
    query.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>().join(" ")
}

pub fn fingerprint(query: &str) -> QueryFingerprint { QueryFingerprint::of(&normalize_query(query)) }

/// Key of the result cache: normalized query, `top_k`, sorted collection
/// filters and source type. Filter order supplied by the caller does not matter.
pub fn result_fingerprint(query: &str, options: &SearchOptions) -> QueryFingerprint {
    let mut filters: Vec<&str> = options.collection_filters.iter().map(String::as_str).collect();
    filters.sort_unstable();
    let composite = format!(
        "{}|{}|{}|{}",
        normalize_query(query),
        options.top_k,
        filters.join(","),
        options.source_type.as_str()
    );
    QueryFingerprint::of(&composite)
}
