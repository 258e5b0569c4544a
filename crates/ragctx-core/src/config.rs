//! Layered configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` + `config.<env>.toml`
//! + `APP_*` env vars (nested keys separated by `__`). Provides helpers to
//! expand `~` and `${VAR}` and to resolve relative paths against a base directory.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub max_size: usize,
    pub ttl_minutes: u64,
}

impl CacheConfig {
    pub fn embedding_defaults() -> Self { Self { max_size: 500, ttl_minutes: 60 } }

    pub fn result_defaults() -> Self { Self { max_size: 200, ttl_minutes: 30 } }

    pub fn ttl(&self) -> Duration { Duration::from_secs(self.ttl_minutes.saturating_mul(60)) }

    fn validate(&self, section: &str) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::InvalidConfig(format!("{section}.max_size must be greater than 0")));
        }
        if self.ttl_minutes == 0 {
            return Err(Error::InvalidConfig(format!("{section}.ttl_minutes must be greater than 0")));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self { Self::result_defaults() }
}

/// Size buckets, similarity thresholds and score cut-offs of the compressor.
///
/// Bucket bounds are inclusive upper limits of the tier below them: an input of
/// exactly `light_threshold` characters is not yet light-deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressorConfig {
    pub max_chars: usize,
    pub fast_path_threshold: usize,
    pub light_threshold: usize,
    pub medium_threshold: usize,
    pub aggressive_threshold: usize,
    pub light_dedup_threshold: f64,
    pub medium_dedup_threshold: f64,
    pub aggressive_dedup_threshold: f64,
    pub medium_min_score: f64,
    pub aggressive_min_score: f64,
    pub min_top_k: usize,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            max_chars: 20_000,
            fast_path_threshold: 10_000,
            light_threshold: 15_000,
            medium_threshold: 25_000,
            aggressive_threshold: 35_000,
            light_dedup_threshold: 0.88,
            medium_dedup_threshold: 0.85,
            aggressive_dedup_threshold: 0.80,
            medium_min_score: 0.3,
            aggressive_min_score: 0.4,
            min_top_k: 3,
        }
    }
}

impl CompressorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            return Err(Error::InvalidConfig("compressor.max_chars must be greater than 0".into()));
        }
        if self.min_top_k == 0 {
            return Err(Error::InvalidConfig("compressor.min_top_k must be at least 1".into()));
        }
        let bounds = [self.fast_path_threshold, self.light_threshold, self.medium_threshold, self.aggressive_threshold];
        if bounds.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidConfig(format!(
                "compressor bucket bounds must be non-decreasing, got {}/{}/{}/{}",
                bounds[0], bounds[1], bounds[2], bounds[3]
            )));
        }
        for (name, value) in [
            ("light_dedup_threshold", self.light_dedup_threshold),
            ("medium_dedup_threshold", self.medium_dedup_threshold),
            ("aggressive_dedup_threshold", self.aggressive_dedup_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!("compressor.{name} must be within [0, 1], got {value}")));
            }
        }
        for (name, value) in [("medium_min_score", self.medium_min_score), ("aggressive_min_score", self.aggressive_min_score)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!("compressor.{name} must be a non-negative number, got {value}")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub embedding_cache: CacheConfig,
    pub result_cache: CacheConfig,
    pub compressor: CompressorConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            embedding_cache: CacheConfig::embedding_defaults(),
            result_cache: CacheConfig::result_defaults(),
            compressor: CompressorConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        self.embedding_cache.validate("embedding_cache")?;
        self.result_cache.validate("result_cache")?;
        self.compressor.validate()
    }
}

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Loads from the current directory, picking the environment from `RUST_ENV`.
    pub fn load() -> Result<Self> { Self::load_from(Path::new(".")) }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(dir, &env_name)
    }

    pub fn load_for_env(dir: &Path, env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(PipelineConfig::default()))
            .merge(Toml::file(dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base_dir: dir.to_path_buf() };
        config.pipeline()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment.extract_inner(key).map_err(Error::from)
    }

    /// Directory the config files were read from.
    pub fn base_dir(&self) -> &Path { &self.base_dir }

    /// Expands `p` and resolves it against [`Config::base_dir`] when relative.
    pub fn resolve_path<S: AsRef<str>>(&self, p: S) -> PathBuf { resolve_with_base(&self.base_dir, p) }

    /// Extracts and validates the typed pipeline settings.
    pub fn pipeline(&self) -> Result<PipelineConfig> {
        let config: PipelineConfig = self.figment.extract()?;
        config.validate()?;
        Ok(config)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
