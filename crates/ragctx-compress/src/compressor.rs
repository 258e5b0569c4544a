//! Size-tiered context compression.
//!
//! | input chars              | strategy                  |
//! |--------------------------|---------------------------|
//! | `<= fast_path_threshold` | none-small (unchanged)    |
//! | `<= light_threshold`     | none (unchanged)          |
//! | `<= medium_threshold`    | light-deduplication       |
//! | `<= aggressive_threshold`| medium-dedup-extraction   |
//! | above                    | aggressive-full           |
use tracing::debug;

use ragctx_core::config::CompressorConfig;
use ragctx_core::types::{total_chars, Chunk, CompressedResult, CompressionStats, Strategy};

use crate::dedup::semantic_dedup;
use crate::extract::extract_relevant;
use crate::keywords::extract_keywords;
use crate::topk::select_top_k;

#[derive(Debug, Clone, Default)]
pub struct ContextCompressor {
    config: CompressorConfig,
}

impl ContextCompressor {
    pub fn new(config: CompressorConfig) -> Self { Self { config } }

    pub fn config(&self) -> &CompressorConfig { &self.config }

    pub fn select_strategy(&self, original_size: usize) -> Strategy {
        let c = &self.config;
        if original_size <= c.fast_path_threshold {
            Strategy::NoneSmall
        } else if original_size > c.aggressive_threshold {
            Strategy::AggressiveFull
        } else if original_size > c.medium_threshold {
            Strategy::MediumDedupExtraction
        } else if original_size > c.light_threshold {
            Strategy::LightDeduplication
        } else {
            // Above the fast path but below every bucket: left as is.
            Strategy::Passthrough
        }
    }

    /// Compresses to the configured `max_chars` budget.
    pub fn compress(&self, chunks: Vec<Chunk>, query: &str) -> CompressedResult {
        self.compress_with_budget(chunks, query, self.config.max_chars)
    }

    /// Reduces `chunks` (ranked by similarity, best first) toward `max_chars`.
    ///
    /// Never drops every chunk of a non-empty input and never grows the content.
    pub fn compress_with_budget(&self, chunks: Vec<Chunk>, query: &str, max_chars: usize) -> CompressedResult {
        let original_size = total_chars(&chunks);
        let original_chunks = chunks.len();
        let strategy = self.select_strategy(original_size);

        let processed = match strategy {
            Strategy::NoneSmall | Strategy::Passthrough => {
                let stats = CompressionStats::unchanged(&chunks, strategy);
                debug!(%strategy, original_size, original_chunks, "context left uncompressed");
                return CompressedResult { chunks, stats };
            }
            Strategy::LightDeduplication => semantic_dedup(chunks, self.config.light_dedup_threshold),
            Strategy::MediumDedupExtraction => {
                let deduped = semantic_dedup(chunks, self.config.medium_dedup_threshold);
                if total_chars(&deduped) > max_chars {
                    let keywords = extract_keywords(query);
                    extract_relevant(deduped, query, &keywords, self.config.medium_min_score)
                } else {
                    deduped
                }
            }
            Strategy::AggressiveFull => {
                let keywords = extract_keywords(query);
                let deduped = semantic_dedup(chunks, self.config.aggressive_dedup_threshold);
                let extracted = extract_relevant(deduped, query, &keywords, self.config.aggressive_min_score);
                let current_size = total_chars(&extracted);
                if current_size > max_chars {
                    let k = (extracted.len() * max_chars).div_ceil(current_size).max(self.config.min_top_k);
                    select_top_k(extracted, k)
                } else {
                    extracted
                }
            }
        };

        let stats = CompressionStats::new(original_size, original_chunks, &processed, strategy);
        debug!(
            %strategy,
            original_size,
            compressed_size = stats.compressed_size,
            original_chunks,
            compressed_chunks = stats.compressed_chunks,
            reduction_percent = stats.reduction_percent,
            "context compressed"
        );
        CompressedResult { chunks: processed, stats }
    }
}
