use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::env;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ragctx_core::config::Config;
use ragctx_core::traits::Retriever;
use ragctx_core::types::{Chunk, SearchOptions};
use ragctx_pipeline::{render_context, ContextPipeline};

/// Serves chunks from a JSON export, ranked by stored similarity.
struct JsonFileRetriever {
    chunks: Vec<Chunk>,
}

impl JsonFileRetriever {
    fn open(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let mut chunks: Vec<Chunk> =
            serde_json::from_str(&raw).with_context(|| format!("Failed to parse chunks from {}", path.display()))?;
        chunks.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(Ordering::Equal));
        Ok(Self { chunks })
    }
}

impl Retriever for JsonFileRetriever {
    fn search(&self, _query: &str, options: &SearchOptions) -> Result<Vec<Chunk>> {
        Ok(self.chunks.iter().take(options.top_k).cloned().collect())
    }
}

fn parse_number(args: &[String], i: usize, flag: &str) -> usize {
    match args.get(i + 1).and_then(|v| v.parse::<usize>().ok()) {
        Some(n) => n,
        None => {
            eprintln!("Error: {flag} requires a number");
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <query> <chunks.json> [--top-k N] [--max-chars N]", args[0]);
        eprintln!("Example: {} 'Battle of Verdun' ~/exports/chunks.json --top-k 20 --max-chars 12000", args[0]);
        std::process::exit(1);
    }
    let query = &args[1];

    let loaded = Config::load()?;
    let chunks_path = loaded.resolve_path(&args[2]);
    let config = loaded.pipeline()?;
    let mut options = SearchOptions::default();
    let mut max_chars = config.compressor.max_chars;
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--top-k" => { options.top_k = parse_number(&args, i, "--top-k"); i += 1; }
            "--max-chars" => { max_chars = parse_number(&args, i, "--max-chars"); i += 1; }
            other => { eprintln!("Error: unknown argument {other}"); std::process::exit(1); }
        }
        i += 1;
    }

    let retriever = JsonFileRetriever::open(&chunks_path)?;
    info!(chunks = retriever.chunks.len(), path = %chunks_path.display(), "loaded chunk export");
    let pipeline = ContextPipeline::new(retriever, &config);

    println!("ragctx-compress\n===============");
    println!("Query: {}", query);
    println!("Chunks file: {}", chunks_path.display());
    let prepared = pipeline.prepare_with_budget(query, &options, max_chars)?;
    let stats = &prepared.result.stats;
    println!("\nStrategy: {}", stats.strategy);
    println!("Size: {} -> {} chars ({:.1}% reduction)", stats.original_size, stats.compressed_size, stats.reduction_percent);
    println!("Chunks: {} -> {}", stats.original_chunks, stats.compressed_chunks);

    let repeat = pipeline.prepare_with_budget(query, &options, max_chars)?;
    let cache = pipeline.result_cache_stats();
    println!("Repeat request served from cache: {} (hit rate {:.0}%)", repeat.cache_hit, cache.hit_rate * 100.0);

    println!("\n{}", render_context(&prepared.result.chunks));
    Ok(())
}
