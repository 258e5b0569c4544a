#![allow(dead_code)]

use ragctx_core::types::Chunk;

pub fn chunk(id: &str, content: &str, similarity: f32) -> Chunk {
    Chunk {
        content: content.to_string(),
        document_id: id.to_string(),
        document_title: format!("Document {id}"),
        page_number: 7,
        similarity,
        embedding: None,
    }
}

/// Distinct-vocabulary prose of exactly `len` ASCII characters, made of
/// full sentences longer than fifty characters each.
pub fn filler(tag: usize, len: usize) -> String {
    let mut out = String::new();
    let mut s = 0;
    while out.len() < len {
        out.push_str(&format!(
            "Archive {tag} record {s} mentions topic{tag}x{s} alongside ledger{tag}y{s} in considerable detail. "
        ));
        s += 1;
    }
    out.truncate(len);
    out
}

/// Like [`filler`] but with a sentence about `needle` inserted third.
pub fn filler_with(tag: usize, len: usize, needle: &str) -> String {
    let head = format!(
        "Archive {tag} opens with a general preface about the collection. \
         A second introductory remark concerns cataloguing conventions. \
         The {needle} passage {tag} records the decisive events of the campaign. "
    );
    let mut out = head.clone();
    out.push_str(&filler(tag, len.saturating_sub(head.len())));
    out
}
