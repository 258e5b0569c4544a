//! Domain types shared by the caches, the compressor and the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type DocumentId = String;

/// A retrieved passage of document text.
///
/// - `content`: the text payload; the compressor may replace it with a reduced version
/// - `document_id`/`document_title`/`page_number`: provenance kept for citation display
/// - `similarity`: retriever score in `[0, 1]`, higher is better
/// - `embedding`: optional vector carried through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chunk {
    pub content: String,
    pub document_id: DocumentId,
    pub document_title: String,
    pub page_number: u32,
    pub similarity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Chunk {
    /// Size of `content` in characters.
    pub fn char_len(&self) -> usize { self.content.chars().count() }
}

/// Total size of a chunk list in characters.
pub fn total_chars(chunks: &[Chunk]) -> usize { chunks.iter().map(Chunk::char_len).sum() }

/// Which part of the corpus a search is restricted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Primary,
    Secondary,
    #[default]
    Both,
}

impl SourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Primary => "primary",
            SourceType::Secondary => "secondary",
            SourceType::Both => "both",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Parameters forwarded to the retriever; they are also part of the result-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub top_k: usize,
    #[serde(default)]
    pub collection_filters: Vec<String>,
    #[serde(default)]
    pub source_type: SourceType,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { top_k: 5, collection_filters: Vec::new(), source_type: SourceType::Both }
    }
}

/// Size tier chosen by the compressor.
///
/// `Passthrough` labels inputs above the fast-path threshold that still fall
/// below the light-deduplication bucket; they are returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    NoneSmall,
    #[serde(rename = "none")]
    Passthrough,
    LightDeduplication,
    MediumDedupExtraction,
    AggressiveFull,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::NoneSmall => "none-small",
            Strategy::Passthrough => "none",
            Strategy::LightDeduplication => "light-deduplication",
            Strategy::MediumDedupExtraction => "medium-dedup-extraction",
            Strategy::AggressiveFull => "aggressive-full",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    pub original_size: usize,
    pub compressed_size: usize,
    pub original_chunks: usize,
    pub compressed_chunks: usize,
    pub reduction_percent: f64,
    pub strategy: Strategy,
}

impl CompressionStats {
    /// Builds stats for an input of `original_size` chars in `original_chunks`
    /// chunks that was reduced to `compressed`.
    pub fn new(original_size: usize, original_chunks: usize, compressed: &[Chunk], strategy: Strategy) -> Self {
        let compressed_size = total_chars(compressed);
        let reduction_percent = if original_size == 0 {
            0.0
        } else {
            original_size.saturating_sub(compressed_size) as f64 / original_size as f64 * 100.0
        };
        Self {
            original_size,
            compressed_size,
            original_chunks,
            compressed_chunks: compressed.len(),
            reduction_percent,
            strategy,
        }
    }

    /// Stats of an input handed back unchanged.
    pub fn unchanged(chunks: &[Chunk], strategy: Strategy) -> Self {
        Self::new(total_chars(chunks), chunks.len(), chunks, strategy)
    }
}

/// Output of one compression run. Built per query and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedResult {
    pub chunks: Vec<Chunk>,
    pub stats: CompressionStats,
}
