//! Adaptive compression of retrieved passages into a bounded prompt context.
//!
//! The entry point is [`ContextCompressor`]. The building blocks (keyword
//! extraction, sentence splitting, word-set deduplication, sentence scoring
//! and top-K selection) are public so callers can reuse them individually.
pub mod compressor;
pub mod dedup;
pub mod extract;
pub mod keywords;
pub mod sentences;
pub mod topk;

pub use compressor::ContextCompressor;
pub use dedup::{jaccard_similarity, semantic_dedup};
pub use extract::{extract_relevant, score_sentence};
pub use keywords::extract_keywords;
pub use sentences::split_sentences;
pub use topk::select_top_k;
