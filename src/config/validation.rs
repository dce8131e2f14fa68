// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Every check runs and every problem is collected, so a rejected config
//! reports all of its faults at once. Checks:
//!
//! 1. **Range**: `min_length >= 2` and `min_length <= max_length`
//! 2. **Seed**: at least one seed word, each exactly `min_length - 1` characters
//!    long after case normalization
//! 3. **Marker**: `contains_any` / `contains_all` name at least one character
//! 4. **Executor**: non-zero `worker_count` and `chunk_size` when given, and a
//!    `worker_count` the pool's semaphore can hold
//!
//! Lengths are counted in `char`s, matching how words are bucketed.

use crate::config::{Config, MarkerPredicate};
use crate::engine::MAX_WORKERS;
use crate::errors::ValidationError;
use crate::observability::messages::validation::ConfigRejected;
use crate::observability::messages::StructuredLog;

/// Validate a configuration before any stage runs.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_length_range(config, &mut errors);
    validate_seed_words(config, &mut errors);

    match &config.marker {
        MarkerPredicate::Any => {}
        MarkerPredicate::ContainsAny(chars) | MarkerPredicate::ContainsAll(chars) => {
            if chars.is_empty() {
                errors.push(ValidationError::EmptyMarkerSet);
            }
        }
    }

    match config.executor_options.worker_count {
        Some(0) => errors.push(ValidationError::ZeroWorkers),
        Some(worker_count) if worker_count > MAX_WORKERS => {
            errors.push(ValidationError::TooManyWorkers {
                worker_count,
                max: MAX_WORKERS,
            })
        }
        _ => {}
    }
    if config.executor_options.chunk_size == Some(0) {
        errors.push(ValidationError::ZeroChunkSize);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        ConfigRejected {
            error_count: errors.len(),
            first_error: &errors[0],
        }
        .log();
        Err(errors)
    }
}

fn validate_length_range(config: &Config, errors: &mut Vec<ValidationError>) {
    if config.min_length < 2 {
        errors.push(ValidationError::MinLengthTooSmall {
            min_length: config.min_length,
        });
    }
    if config.min_length > config.max_length {
        errors.push(ValidationError::InvalidLengthRange {
            min_length: config.min_length,
            max_length: config.max_length,
        });
    }
}

fn validate_seed_words(config: &Config, errors: &mut Vec<ValidationError>) {
    if config.seed_words.is_empty() {
        errors.push(ValidationError::EmptySeedSet);
        return;
    }

    // Nothing meaningful to compare against once the range itself is broken
    if config.min_length < 2 {
        return;
    }

    let expected = config.seed_length();
    for word in &config.seed_words {
        let actual = config.corpus.normalize.apply(word.trim()).chars().count();
        if actual != expected {
            errors.push(ValidationError::SeedLengthMismatch {
                word: word.clone(),
                expected,
                actual,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExecutorOptions, SourceConfig};
    use std::path::PathBuf;

    fn base_config() -> Config {
        Config {
            source: SourceConfig::File(PathBuf::from("words.txt")),
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn test_inverted_range() {
        let config = Config {
            min_length: 5,
            max_length: 4,
            seed_words: vec!["ABCD".to_string()],
            ..base_config()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidLengthRange {
                min_length: 5,
                max_length: 4
            }]
        );
    }

    #[test]
    fn test_min_length_one_is_rejected() {
        let config = Config {
            min_length: 1,
            ..base_config()
        };

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::MinLengthTooSmall { min_length: 1 }));
    }

    #[test]
    fn test_empty_seed_set() {
        let config = Config {
            seed_words: vec![],
            ..base_config()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptySeedSet]);
    }

    #[test]
    fn test_seed_length_mismatch() {
        let config = Config {
            seed_words: vec!["A".to_string(), "AT".to_string()],
            ..base_config()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::SeedLengthMismatch {
                word: "AT".to_string(),
                expected: 1,
                actual: 2,
            }]
        );
    }

    #[test]
    fn test_collects_every_problem() {
        let config = Config {
            marker: MarkerPredicate::ContainsAny(vec![]),
            executor_options: ExecutorOptions {
                worker_count: Some(0),
                chunk_size: Some(0),
            },
            ..base_config()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyMarkerSet,
                ValidationError::ZeroWorkers,
                ValidationError::ZeroChunkSize,
            ]
        );
    }

    #[test]
    fn test_worker_count_beyond_pool_capacity() {
        let config = Config {
            executor_options: ExecutorOptions {
                worker_count: Some(usize::MAX),
                chunk_size: None,
            },
            ..base_config()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TooManyWorkers {
                worker_count: usize::MAX,
                max: MAX_WORKERS,
            }]
        );
    }
}
