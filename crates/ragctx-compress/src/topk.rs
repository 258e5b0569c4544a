use std::cmp::Ordering;

use ragctx_core::types::Chunk;

/// Highest-similarity `k` chunks; ties keep their input order.
pub fn select_top_k(mut chunks: Vec<Chunk>, k: usize) -> Vec<Chunk> {
    chunks.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(Ordering::Equal));
    chunks.truncate(k);
    chunks
}
