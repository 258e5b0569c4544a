//! Near-duplicate removal by word-set overlap.
use std::collections::HashSet;

use ragctx_core::types::Chunk;

/// Lowercased alphanumeric tokens of `text`. Punctuation separates tokens,
/// so "1848," and "1848" are the same word.
pub fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// `|A ∩ B| / |A ∪ B|`; two empty sets have similarity 0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

pub fn jaccard_similarity(a: &str, b: &str) -> f64 { jaccard(&word_set(a), &word_set(b)) }

/// Keeps a chunk unless it is more than `threshold` similar to a chunk kept
/// before it. Input order is rank order, so a duplicate never displaces a
/// higher-ranked chunk and the first chunk is always kept.
pub fn semantic_dedup(chunks: Vec<Chunk>, threshold: f64) -> Vec<Chunk> {
    let mut kept: Vec<(Chunk, HashSet<String>)> = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let words = word_set(&chunk.content);
        if kept.iter().any(|(_, seen)| jaccard(&words, seen) > threshold) {
            continue;
        }
        kept.push((chunk, words));
    }
    kept.into_iter().map(|(chunk, _)| chunk).collect()
}
