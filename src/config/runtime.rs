// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::corpus::loader_for;
use crate::engine::factory::ExecutorFactory;
use crate::engine::{Pipeline, PipelineOptions};
use crate::errors::ConfigError;
use crate::traits::{CorpusLoader, StageExecutor};

/// Runtime builder - turns a configuration into the pieces of a run.
///
/// The `RuntimeBuilder` validates the configuration once and then creates the
/// corpus loader, the stage executor and the pipeline options from it, so
/// nothing downstream reads configuration fields directly.
///
/// # Examples
///
/// ```
/// use the_wordladder::config::{Config, RuntimeBuilder};
///
/// let config = Config::default();
/// let (loader, executor, options) = RuntimeBuilder::from_config(&config).unwrap();
///
/// assert_eq!(executor.name(), "WorkerPool");
/// assert_eq!(options.max_length, 9);
/// assert!(loader.describe().starts_with("https://"));
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the runtime components from configuration.
    ///
    /// Creates and returns:
    /// - `Box<dyn CorpusLoader>`: Loader for the configured source
    /// - `Box<dyn StageExecutor>`: Executor configured per strategy
    /// - `PipelineOptions`: Bucket range, seed set and marker predicate
    ///
    /// # Errors
    /// `ConfigError::Invalid` listing every validation problem
    pub fn from_config(
        cfg: &Config,
    ) -> Result<(Box<dyn CorpusLoader>, Box<dyn StageExecutor>, PipelineOptions), ConfigError> {
        cfg.validate()?;

        let loader = loader_for(&cfg.source, &cfg.corpus);
        let executor = ExecutorFactory::from_config(cfg);
        let options = PipelineOptions::from_config(cfg);
        Ok((loader, executor, options))
    }

    /// Build a ready-to-run pipeline together with its corpus loader
    pub fn pipeline_from_config(
        cfg: &Config,
    ) -> Result<(Box<dyn CorpusLoader>, Pipeline), ConfigError> {
        let (loader, executor, options) = Self::from_config(cfg)?;
        Ok((loader, Pipeline::new(options, executor)))
    }
}
