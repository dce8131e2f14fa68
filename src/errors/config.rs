// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Problems found while validating a pipeline configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The bucket range is empty (`min_length > max_length`)
    InvalidLengthRange { min_length: usize, max_length: usize },
    /// Length 1 (or 0) is reserved for the seed set and cannot be a bucket
    MinLengthTooSmall { min_length: usize },
    /// No seed words were supplied
    EmptySeedSet,
    /// A seed word does not have the length of the stage below `min_length`
    SeedLengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },
    /// The worker pool would have no workers
    ZeroWorkers,
    /// More workers than the pool's permit semaphore can hold
    TooManyWorkers { worker_count: usize, max: usize },
    /// Chunks of zero words would never make progress
    ZeroChunkSize,
    /// A `contains_any` / `contains_all` marker with no characters
    EmptyMarkerSet,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidLengthRange {
                min_length,
                max_length,
            } => {
                write!(
                    f,
                    "Invalid length range: min_length {} is greater than max_length {}",
                    min_length, max_length
                )
            }
            ValidationError::MinLengthTooSmall { min_length } => {
                write!(
                    f,
                    "min_length must be at least 2 (got {}); shorter words belong in seed_words",
                    min_length
                )
            }
            ValidationError::EmptySeedSet => write!(f, "seed_words must not be empty"),
            ValidationError::SeedLengthMismatch {
                word,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Seed word '{}' has length {} but the seed stage expects length {}",
                    word, actual, expected
                )
            }
            ValidationError::ZeroWorkers => write!(f, "worker_count must be at least 1"),
            ValidationError::TooManyWorkers { worker_count, max } => {
                write!(f, "worker_count {} exceeds the maximum of {}", worker_count, max)
            }
            ValidationError::ZeroChunkSize => write!(f, "chunk_size must be at least 1"),
            ValidationError::EmptyMarkerSet => {
                write!(f, "marker predicate must name at least one character")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while reading or validating configuration. All of them are
/// fatal and surface before any stage runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("Unsupported config format for '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
