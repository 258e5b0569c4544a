//! Query-relevant sentence extraction.
use std::cmp::Ordering;

use ragctx_core::types::Chunk;

use crate::sentences::split_sentences;

const KEYWORD_WEIGHT: f64 = 1.0;
const FULL_QUERY_BONUS: f64 = 2.0;
const POSITION_BONUS: f64 = 0.3;
const POSITION_DECAY: f64 = 0.05;
const SHORT_SENTENCE_CHARS: usize = 50;
const SHORT_SENTENCE_FACTOR: f64 = 0.5;
const MIN_SENTENCES: usize = 2;

/// Relevance of the sentence at `index` within its chunk.
///
/// `query` and `keywords` are matched case-insensitively as substrings. An
/// empty query never earns the full-query bonus.
pub fn score_sentence(sentence: &str, index: usize, query: &str, keywords: &[String]) -> f64 {
    let lowered = sentence.to_lowercase();
    let query = query.trim().to_lowercase();

    let mut score = keywords.iter().filter(|k| lowered.contains(&k.to_lowercase())).count() as f64 * KEYWORD_WEIGHT;
    if !query.is_empty() && lowered.contains(&query) {
        score += FULL_QUERY_BONUS;
    }
    score += (POSITION_BONUS - POSITION_DECAY * index as f64).max(0.0);
    if sentence.chars().count() < SHORT_SENTENCE_CHARS {
        score *= SHORT_SENTENCE_FACTOR;
    }
    score
}

/// Reduces `content` to its sentences scoring at least `min_score`, or to its
/// two best sentences when fewer qualify. Kept sentences stay in reading order
/// and are joined by a single space.
pub fn extract_from_text(content: &str, query: &str, keywords: &[String], min_score: f64) -> String {
    let sentences = split_sentences(content);
    let scored: Vec<(usize, f64)> =
        sentences.iter().enumerate().map(|(i, s)| (i, score_sentence(s, i, query, keywords))).collect();

    let mut kept: Vec<usize> = scored.iter().filter(|(_, score)| *score >= min_score).map(|(i, _)| *i).collect();
    if kept.len() < MIN_SENTENCES {
        let mut ranked = scored;
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        kept = ranked.into_iter().take(MIN_SENTENCES).map(|(i, _)| i).collect();
        kept.sort_unstable();
    }

    kept.into_iter().map(|i| sentences[i]).collect::<Vec<_>>().join(" ")
}

/// Applies [`extract_from_text`] to every chunk; provenance fields are untouched.
pub fn extract_relevant(chunks: Vec<Chunk>, query: &str, keywords: &[String], min_score: f64) -> Vec<Chunk> {
    chunks
        .into_iter()
        .map(|mut chunk| {
            chunk.content = extract_from_text(&chunk.content, query, keywords, min_score);
            chunk
        })
        .collect()
}
