//! Per-request orchestration: result cache, external retriever, compressor.
use std::fmt::Write as _;
use tracing::{debug, info_span, warn};

use ragctx_cache::{CacheStats, ResultCache};
use ragctx_compress::ContextCompressor;
use ragctx_core::config::PipelineConfig;
use ragctx_core::error::{Error, Result};
use ragctx_core::traits::Retriever;
use ragctx_core::types::{Chunk, CompressedResult, SearchOptions};

/// Compressed context for one request, plus whether retrieval was served from cache.
#[derive(Debug, Clone)]
pub struct PreparedContext {
    pub result: CompressedResult,
    pub cache_hit: bool,
}

pub struct ContextPipeline<R> where R: Retriever {
    retriever: R,
    results: ResultCache,
    compressor: ContextCompressor,
}

impl<R> ContextPipeline<R> where R: Retriever {
    pub fn new(retriever: R, config: &PipelineConfig) -> Self {
        Self::with_parts(retriever, ResultCache::new(&config.result_cache), ContextCompressor::new(config.compressor.clone()))
    }

    pub fn with_parts(retriever: R, results: ResultCache, compressor: ContextCompressor) -> Self {
        Self { retriever, results, compressor }
    }

    pub fn retriever(&self) -> &R { &self.retriever }

    /// Ranked chunks for `query`, from cache when possible. A failed retrieval
    /// is reported and leaves the cache untouched.
    pub fn retrieve(&self, query: &str, options: &SearchOptions) -> Result<(Vec<Chunk>, bool)> {
        if let Some(cached) = self.results.get(query, options) {
            debug!(chunks = cached.len(), "result cache hit");
            return Ok((cached, true));
        }
        let chunks = self.retriever.search(query, options).map_err(|e| {
            let message = format!("{e:#}");
            warn!(error = %message, "retrieval failed");
            Error::Retrieval(message)
        })?;
        debug!(chunks = chunks.len(), "result cache miss, storing retrieved chunks");
        self.results.set(query, options, chunks.clone());
        Ok((chunks, false))
    }

    pub fn prepare(&self, query: &str, options: &SearchOptions) -> Result<PreparedContext> {
        self.prepare_with_budget(query, options, self.compressor.config().max_chars)
    }

    /// Retrieves (or reuses) ranked chunks and always compresses them to `max_chars`.
    pub fn prepare_with_budget(&self, query: &str, options: &SearchOptions, max_chars: usize) -> Result<PreparedContext> {
        let span = info_span!("prepare_context", top_k = options.top_k, source_type = %options.source_type);
        let _guard = span.enter();

        let (chunks, cache_hit) = self.retrieve(query, options)?;
        let result = self.compressor.compress_with_budget(chunks, query, max_chars);
        debug!(
            cache_hit,
            strategy = %result.stats.strategy,
            compressed_chunks = result.stats.compressed_chunks,
            "context prepared"
        );
        Ok(PreparedContext { result, cache_hit })
    }

    pub fn result_cache_stats(&self) -> CacheStats { self.results.stats() }

    pub fn clear_cache(&self) { self.results.clear() }
}

/// Numbered passages with title and page, ready to paste into a prompt:
///
/// ```text
/// [1] Title (p. 3)
/// content
///
/// [2] ...
/// ```
pub fn render_context(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        let _ = write!(out, "[{}] {} (p. {})\n{}", i + 1, chunk.document_title, chunk.page_number, chunk.content);
    }
    out
}
