//! Shared types, error taxonomy, collaborator traits and configuration for
//! the retrieval context pipeline.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::{Chunk, CompressedResult, CompressionStats, SearchOptions, SourceType, Strategy};
