// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_CORPUS_HEADER_LINES, DEFAULT_CORPUS_URL, DEFAULT_MAX_LENGTH,
    DEFAULT_MIN_LENGTH, DEFAULT_SEED_WORDS, FALLBACK_WORKER_COUNT,
};
use crate::config::MarkerPredicate;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for a word-ladder run.
///
/// Describes where the corpus comes from, which bucket lengths to build,
/// the seed surviving set, the marker predicate used when bucketing and how
/// the per-stage work is scheduled. It is typically loaded from a YAML or
/// TOML file; [`Config::default`] reproduces the nine-letter-word puzzle.
///
/// # Fields
/// * `strategy` - How each stage is executed (optional, defaults to `worker_pool`)
/// * `source` - Where the corpus is read from
/// * `corpus` - Line handling options for the corpus (optional)
/// * `min_length` / `max_length` - Inclusive bucket range (optional, defaults to 2..=9)
/// * `seed_words` - Surviving set of the stage below `min_length` (optional, defaults to `["A", "I"]`)
/// * `marker` - Per-word bucket filter (optional, defaults to `contains_any: [A, I]`)
/// * `executor_options` - Worker pool sizing (optional)
///
/// # Example
/// ```yaml
/// strategy: worker_pool
/// source:
///   file: data/sample-words.txt
/// corpus:
///   skip_lines: 2
/// min_length: 2
/// max_length: 9
/// seed_words: ["A", "I"]
/// marker:
///   contains_any: ["A", "I"]
/// executor_options:
///   worker_count: 7
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub strategy: Strategy,
    pub source: SourceConfig,
    #[serde(default)]
    pub corpus: CorpusOptions,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_seed_words")]
    pub seed_words: Vec<String>,
    #[serde(default)]
    pub marker: MarkerPredicate,
    #[serde(default)]
    pub executor_options: ExecutorOptions,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_seed_words() -> Vec<String> {
    DEFAULT_SEED_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            source: SourceConfig::Url(DEFAULT_CORPUS_URL.to_string()),
            corpus: CorpusOptions {
                skip_lines: DEFAULT_CORPUS_HEADER_LINES,
                normalize: CaseNormalization::None,
            },
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            seed_words: default_seed_words(),
            marker: MarkerPredicate::default(),
            executor_options: ExecutorOptions::default(),
        }
    }
}

impl Config {
    /// Parse a YAML document into a configuration (no validation)
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a TOML document into a configuration (no validation)
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Length of the words in the seed set
    pub fn seed_length(&self) -> usize {
        self.min_length.saturating_sub(1)
    }

    /// Effective parallelism: one for the sequential strategy, otherwise the
    /// configured worker count or the number of available cores.
    pub fn worker_count(&self) -> usize {
        match self.strategy {
            Strategy::Sequential => 1,
            Strategy::WorkerPool => self
                .executor_options
                .worker_count
                .unwrap_or_else(default_worker_count),
        }
    }

    /// Check the configuration, collecting every problem into one error
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::config::validate_config(self).map_err(ConfigError::Invalid)
    }
}

/// Number of available CPU cores, falling back to 4 if detection fails
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(FALLBACK_WORKER_COUNT)
}

/// Execution strategy for each reduction stage.
///
/// # Variants
/// * `Sequential` - Reduce every word of a bucket on the calling task
/// * `WorkerPool` - Split a bucket into chunks reduced by a fixed-size worker pool
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Sequential,
    #[default]
    WorkerPool,
}

/// Where the corpus is read from.
///
/// ```yaml
/// source:
///   url: https://example.com/words.txt
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    File(PathBuf),
    Url(String),
}

impl SourceConfig {
    /// Interpret a command-line source: `http://` and `https://` are fetched,
    /// anything else is a local path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            SourceConfig::Url(value.to_string())
        } else {
            SourceConfig::File(PathBuf::from(value))
        }
    }
}

/// How raw corpus lines are turned into words.
///
/// # Fields
/// * `skip_lines` - Header lines dropped before any word is read (defaults to 0)
/// * `normalize` - Case folding applied to every word, the seed set and the marker characters (defaults to none)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorpusOptions {
    #[serde(default)]
    pub skip_lines: usize,
    #[serde(default)]
    pub normalize: CaseNormalization,
}

/// Case folding applied while loading
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseNormalization {
    #[default]
    None,
    Uppercase,
    Lowercase,
}

impl CaseNormalization {
    pub fn apply(&self, word: &str) -> String {
        match self {
            CaseNormalization::None => word.to_string(),
            CaseNormalization::Uppercase => word.to_uppercase(),
            CaseNormalization::Lowercase => word.to_lowercase(),
        }
    }
}

/// Worker pool sizing.
///
/// # Fields
/// * `worker_count` - Number of concurrent workers per stage (defaults to available cores)
/// * `chunk_size` - Words handed to a worker at a time (defaults to a size derived from the bucket)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutorOptions {
    pub worker_count: Option<usize>,
    pub chunk_size: Option<usize>,
}

/// Load a config from a YAML (`.yaml`, `.yml`) or TOML (`.toml`) file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Config::from_yaml_str(&content),
        Some("toml") => Config::from_toml_str(&content),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load and validate a config file.
///
/// Validation failures are reported together so a single edit can fix them.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_yaml_uses_defaults() {
        let yaml = r#"
source:
  file: words.txt
"#;

        let cfg = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.strategy, Strategy::WorkerPool);
        assert_eq!(cfg.source, SourceConfig::File(PathBuf::from("words.txt")));
        assert_eq!(cfg.corpus, CorpusOptions::default());
        assert_eq!(cfg.min_length, 2);
        assert_eq!(cfg.max_length, 9);
        assert_eq!(cfg.seed_words, vec!["A", "I"]);
        assert_eq!(cfg.marker, MarkerPredicate::ContainsAny(vec!['A', 'I']));
        assert_eq!(cfg.executor_options, ExecutorOptions::default());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
strategy: sequential
source:
  url: https://example.com/words.txt
corpus:
  skip_lines: 2
  normalize: uppercase
min_length: 3
max_length: 5
seed_words: ["AT", "IT"]
marker:
  contains_all: ["E"]
executor_options:
  worker_count: 3
  chunk_size: 10
"#;

        let cfg = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.strategy, Strategy::Sequential);
        assert_eq!(
            cfg.source,
            SourceConfig::Url("https://example.com/words.txt".to_string())
        );
        assert_eq!(cfg.corpus.skip_lines, 2);
        assert_eq!(cfg.corpus.normalize, CaseNormalization::Uppercase);
        assert_eq!(cfg.seed_length(), 2);
        assert_eq!(cfg.marker, MarkerPredicate::ContainsAll(vec!['E']));
        assert_eq!(cfg.executor_options.chunk_size, Some(10));
        // Sequential always runs on a single worker
        assert_eq!(cfg.worker_count(), 1);
    }

    #[test]
    fn parse_toml() {
        let toml = r#"
strategy = "worker_pool"
min_length = 2
max_length = 4
marker = "any"

[source]
file = "words.txt"

[executor_options]
worker_count = 2
"#;

        let cfg = Config::from_toml_str(toml).unwrap();
        assert_eq!(cfg.max_length, 4);
        assert_eq!(cfg.marker, MarkerPredicate::Any);
        assert_eq!(cfg.worker_count(), 2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = r#"
source:
  file: words.txt
max_lenght: 9
"#;

        let result = Config::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::ParseYaml(_))));
    }

    #[test]
    fn default_config_is_the_nine_letter_puzzle() {
        let cfg = Config::default();
        assert_eq!(cfg.source, SourceConfig::Url(DEFAULT_CORPUS_URL.to_string()));
        assert_eq!(cfg.corpus.skip_lines, 2);
        assert_eq!(cfg.marker, MarkerPredicate::ContainsAny(vec!['A', 'I']));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn source_parse_distinguishes_urls_from_paths() {
        assert_eq!(
            SourceConfig::parse("https://example.com/w.txt"),
            SourceConfig::Url("https://example.com/w.txt".to_string())
        );
        assert_eq!(
            SourceConfig::parse("data/w.txt"),
            SourceConfig::File(PathBuf::from("data/w.txt"))
        );
    }

    #[test]
    fn test_load_config_rejects_unknown_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let temp_file = temp_dir.path().join("config.json");
        std::fs::write(&temp_file, "{}").unwrap();

        let result = load_config(&temp_file);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_and_validate_invalid_range() {
        let yaml = r#"
source:
  file: words.txt
min_length: 6
max_length: 3
"#;

        let temp_dir = tempfile::tempdir().unwrap();
        let temp_file = temp_dir.path().join("invalid.yaml");
        std::fs::write(&temp_file, yaml).unwrap();

        let result = load_and_validate_config(&temp_file);
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Invalid length range"));
    }
}
