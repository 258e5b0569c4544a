use crate::types::{Chunk, SearchOptions};

/// External vector search. Results must be ranked by `similarity` descending.
pub trait Retriever: Send + Sync {
    fn search(&self, query: &str, options: &SearchOptions) -> anyhow::Result<Vec<Chunk>>;
}

/// External query embedder.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>>;
}

impl<T: Retriever + ?Sized> Retriever for Box<T> {
    fn search(&self, query: &str, options: &SearchOptions) -> anyhow::Result<Vec<Chunk>> { (**self).search(query, options) }
}

impl<T: Embedder + ?Sized> Embedder for Box<T> {
    fn dim(&self) -> usize { (**self).dim() }
    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> { (**self).embed(text) }
}
