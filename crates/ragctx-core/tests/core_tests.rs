use std::fs;
use tempfile::TempDir;

use ragctx_core::config::{resolve_with_base, CacheConfig, CompressorConfig, Config, PipelineConfig};
use ragctx_core::types::{total_chars, Chunk, CompressionStats, SearchOptions, SourceType, Strategy};
use ragctx_core::Error;

fn chunk(content: &str) -> Chunk {
    Chunk {
        content: content.to_string(),
        document_id: "doc-1".to_string(),
        document_title: "Mémoires".to_string(),
        page_number: 4,
        similarity: 0.9,
        embedding: None,
    }
}

#[test]
fn chunk_sizes_count_characters_not_bytes() {
    let c = chunk("éèà");
    assert_eq!(c.content.len(), 6);
    assert_eq!(c.char_len(), 3);
    assert_eq!(total_chars(&[c.clone(), c]), 6);
}

#[test]
fn chunk_rejects_unknown_fields() {
    let ok = r#"{"content":"x","document_id":"d","document_title":"t","page_number":1,"similarity":0.5}"#;
    let parsed: Chunk = serde_json::from_str(ok).expect("known fields parse");
    assert!(parsed.embedding.is_none());

    let bad = r#"{"content":"x","document_id":"d","document_title":"t","page_number":1,"similarity":0.5,"zotero_key":"ABC"}"#;
    assert!(serde_json::from_str::<Chunk>(bad).is_err(), "unknown metadata is rejected at the boundary");
}

#[test]
fn strategy_and_source_type_names() {
    assert_eq!(Strategy::AggressiveFull.to_string(), "aggressive-full");
    assert_eq!(Strategy::Passthrough.to_string(), "none");
    assert_eq!(serde_json::to_string(&Strategy::MediumDedupExtraction).unwrap(), "\"medium-dedup-extraction\"");
    assert_eq!(serde_json::to_string(&Strategy::Passthrough).unwrap(), "\"none\"");
    assert_eq!(SourceType::default(), SourceType::Both);
    assert_eq!(SourceType::Secondary.to_string(), "secondary");
}

#[test]
fn search_options_defaults() {
    let opts = SearchOptions::default();
    assert_eq!(opts.top_k, 5);
    assert!(opts.collection_filters.is_empty());
    assert_eq!(opts.source_type, SourceType::Both);
}

#[test]
fn stats_reduction_percent() {
    let before = vec![chunk(&"a".repeat(100)), chunk(&"b".repeat(100))];
    let after = vec![chunk(&"a".repeat(50))];
    let stats = CompressionStats::new(total_chars(&before), before.len(), &after, Strategy::LightDeduplication);
    assert_eq!(stats.original_size, 200);
    assert_eq!(stats.compressed_size, 50);
    assert_eq!(stats.original_chunks, 2);
    assert_eq!(stats.compressed_chunks, 1);
    assert!((stats.reduction_percent - 75.0).abs() < 1e-9);

    let empty = CompressionStats::unchanged(&[], Strategy::NoneSmall);
    assert_eq!(empty.reduction_percent, 0.0);
    assert_eq!((empty.original_size, empty.compressed_chunks), (0, 0));

    let same = CompressionStats::unchanged(&before, Strategy::Passthrough);
    assert_eq!(same.original_size, same.compressed_size);
    assert_eq!(same.reduction_percent, 0.0);
}

#[test]
fn pipeline_defaults_match_documented_constants() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.embedding_cache, CacheConfig { max_size: 500, ttl_minutes: 60 });
    assert_eq!(cfg.result_cache, CacheConfig { max_size: 200, ttl_minutes: 30 });
    assert_eq!(cfg.compressor.max_chars, 20_000);
    assert_eq!(cfg.compressor.fast_path_threshold, 10_000);
    assert_eq!(cfg.compressor.aggressive_dedup_threshold, 0.80);
    assert_eq!(cfg.result_cache.ttl().as_secs(), 30 * 60);
    cfg.validate().expect("defaults are valid");
}

#[test]
fn compressor_validation_rejects_bad_values() {
    let cfg = CompressorConfig { light_threshold: 40_000, ..CompressorConfig::default() };
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));

    let cfg = CompressorConfig { medium_dedup_threshold: 1.5, ..CompressorConfig::default() };
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));

    let cfg = CompressorConfig { max_chars: 0, ..CompressorConfig::default() };
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn load_from_directory_merges_env_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[result_cache]\nmax_size = 42\n").unwrap();
    fs::write(tmp.path().join("config.prod.toml"), "[compressor]\nmax_chars = 12000\n").unwrap();

    let config = Config::load_for_env(tmp.path(), "prod").expect("load");
    let pipeline = config.pipeline().expect("pipeline");
    assert_eq!(pipeline.result_cache.max_size, 42);
    assert_eq!(pipeline.result_cache.ttl_minutes, 30, "unset keys keep defaults");
    assert_eq!(pipeline.compressor.max_chars, 12_000);
    assert_eq!(config.get::<usize>("result_cache.max_size").unwrap(), 42);
}

#[test]
fn invalid_file_values_fail_loading() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[embedding_cache]\nmax_size = 0\n").unwrap();
    assert!(matches!(Config::load_for_env(tmp.path(), "dev"), Err(Error::InvalidConfig(_))));
}

#[test]
fn relative_paths_resolve_against_config_directory() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_for_env(tmp.path(), "dev").expect("load");
    assert_eq!(config.base_dir(), tmp.path());
    assert_eq!(config.resolve_path("exports/chunks.json"), tmp.path().join("exports/chunks.json"));

    let absolute = tmp.path().join("elsewhere.json");
    let absolute_str = absolute.to_str().unwrap();
    assert_eq!(config.resolve_path(absolute_str), absolute, "absolute paths are kept");
    assert_eq!(resolve_with_base(tmp.path(), absolute_str), absolute);
}
