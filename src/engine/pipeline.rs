// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pipeline orchestration.
//!
//! A run moves through `Idle → Loading → Bucketizing → Reducing(k) … → Done`,
//! or ends in `Failed`. Stage k starts only after stage k-1's surviving set is
//! fully materialized; the parallelism lives inside each stage's executor.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::corpus::{char_len, Bucket, BucketIndex, Word};
use crate::engine::fold::fold_stages;
use crate::engine::SurvivingSet;
use crate::errors::{ConfigError, PipelineError, PipelinePhase, ValidationError};
use crate::observability::messages::corpus::{BucketsBuilt, CorpusLoadStarted, CorpusLoaded};
use crate::observability::messages::engine::{
    PipelineCompleted, PipelineFailed, PipelineStarted, PipelineStateChanged, StageCompleted,
    StageStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{CorpusLoader, StageExecutor, WordFilter};

/// What to compute: the bucket range, the seed set and the bucket filter.
#[derive(Clone)]
pub struct PipelineOptions {
    pub min_length: usize,
    pub max_length: usize,
    pub seed_words: Vec<Word>,
    pub filter: Arc<dyn WordFilter>,
}

impl PipelineOptions {
    pub fn new<I>(
        min_length: usize,
        max_length: usize,
        seed_words: I,
        filter: Arc<dyn WordFilter>,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        Self {
            min_length,
            max_length,
            seed_words: seed_words.into_iter().map(Into::into).collect(),
            filter,
        }
    }

    /// Options for a validated config. Seed words and marker characters get
    /// the corpus's case normalization so they compare equal to loaded words.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            min_length: cfg.min_length,
            max_length: cfg.max_length,
            seed_words: cfg
                .seed_words
                .iter()
                .map(|w| Word::from(cfg.corpus.normalize.apply(w.trim())))
                .collect(),
            filter: Arc::new(cfg.marker.normalized(&cfg.corpus.normalize)),
        }
    }

    /// Range and seed checks; run before any stage.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        if self.min_length < 2 {
            errors.push(ValidationError::MinLengthTooSmall {
                min_length: self.min_length,
            });
        }
        if self.min_length > self.max_length {
            errors.push(ValidationError::InvalidLengthRange {
                min_length: self.min_length,
                max_length: self.max_length,
            });
        }
        if self.seed_words.is_empty() {
            errors.push(ValidationError::EmptySeedSet);
        } else if self.min_length >= 2 {
            let expected = self.min_length - 1;
            for word in &self.seed_words {
                let actual = char_len(word);
                if actual != expected {
                    errors.push(ValidationError::SeedLengthMismatch {
                        word: word.to_string(),
                        expected,
                        actual,
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("seed_words", &self.seed_words)
            .finish_non_exhaustive()
    }
}

/// Observable state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Loading,
    Bucketizing,
    Reducing(usize),
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Loading => write!(f, "loading"),
            PipelineState::Bucketizing => write!(f, "bucketizing"),
            PipelineState::Reducing(length) => write!(f, "reducing({})", length),
            PipelineState::Done => write!(f, "done"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

/// Diagnostic counts for one stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageReport {
    pub length: usize,
    pub bucket_size: usize,
    pub surviving: usize,
    pub elapsed_ms: u64,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutcome {
    pub final_length: usize,
    pub corpus_size: usize,
    /// Final surviving set, sorted ascending
    pub words: Vec<String>,
    pub stages: Vec<StageReport>,
    pub elapsed_ms: u64,
}

/// Accumulator threaded through the stages
struct StageChain {
    surviving: Arc<SurvivingSet>,
    reports: Vec<StageReport>,
}

/// Drives one run from corpus loading to the final surviving set.
///
/// The pipeline owns its stage executor and shuts it down when the run ends,
/// whether it succeeded or not, so `run` consumes the pipeline. Obtain a
/// [`subscribe`](Pipeline::subscribe) receiver or a
/// [`cancellation_token`](Pipeline::cancellation_token) before calling it.
pub struct Pipeline {
    options: PipelineOptions,
    executor: Box<dyn StageExecutor>,
    cancel: CancellationToken,
    state: watch::Sender<PipelineState>,
}

impl Pipeline {
    pub fn new(options: PipelineOptions, executor: Box<dyn StageExecutor>) -> Self {
        let (state, _) = watch::channel(PipelineState::Idle);
        Self {
            options,
            executor,
            cancel: CancellationToken::new(),
            state,
        }
    }

    /// Token that aborts the run when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Receiver for state transitions; keeps the last state after the run ends
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> PipelineState {
        self.state.borrow().clone()
    }

    /// Run every stage and return the sorted final surviving set.
    pub async fn run(self, loader: &dyn CorpusLoader) -> Result<PipelineOutcome, PipelineError> {
        let started = Instant::now();
        PipelineStarted {
            strategy: self.executor.name(),
            min_length: self.options.min_length,
            max_length: self.options.max_length,
            worker_count: self.executor.worker_count(),
        }
        .log();

        let result = self.execute(loader, started).await;
        self.executor.shutdown();

        match &result {
            Ok(outcome) => {
                self.transition(PipelineState::Done);
                PipelineCompleted {
                    final_length: outcome.final_length,
                    surviving: outcome.words.len(),
                    duration: started.elapsed(),
                }
                .log();
            }
            Err(error) => {
                self.transition(PipelineState::Failed);
                PipelineFailed {
                    phase: error.phase(),
                    error,
                }
                .log();
            }
        }

        result
    }

    async fn execute(
        &self,
        loader: &dyn CorpusLoader,
        started: Instant,
    ) -> Result<PipelineOutcome, PipelineError> {
        self.options.validate()?;

        self.transition(PipelineState::Loading);
        let source = loader.describe();
        CorpusLoadStarted { source: &source }.log();
        let load_started = Instant::now();
        let corpus = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                return Err(PipelineError::Cancelled { phase: PipelinePhase::Loading });
            }
            result = loader.load() => result?,
        };
        CorpusLoaded {
            source: &source,
            word_count: corpus.len(),
            duration: load_started.elapsed(),
        }
        .log();
        let corpus = Arc::new(corpus);

        self.transition(PipelineState::Bucketizing);
        self.check_cancelled(PipelinePhase::Bucketizing)?;
        let index = BucketIndex::new(
            corpus.clone(),
            self.options.min_length..=self.options.max_length,
            self.options.filter.clone(),
        );
        let buckets = index.materialize();
        BucketsBuilt {
            bucket_count: buckets.len(),
            bucketed_words: buckets.iter().map(|b| b.len()).sum(),
            min_length: self.options.min_length,
            max_length: self.options.max_length,
        }
        .log();

        let seed = SurvivingSet::seed(
            self.options.min_length - 1,
            self.options.seed_words.iter().cloned(),
        );
        let chain = StageChain {
            surviving: Arc::new(seed),
            reports: Vec::with_capacity(buckets.len()),
        };

        let chain = fold_stages(chain, buckets, move |chain, bucket| self.advance(chain, bucket)).await?;

        Ok(PipelineOutcome {
            final_length: self.options.max_length,
            corpus_size: corpus.len(),
            words: chain
                .surviving
                .sorted()
                .into_iter()
                .map(|w| w.to_string())
                .collect(),
            stages: chain.reports,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Reduce one bucket against the chain's current surviving set
    async fn advance(
        &self,
        mut chain: StageChain,
        bucket: Arc<Bucket>,
    ) -> Result<StageChain, PipelineError> {
        let length = bucket.length();
        self.transition(PipelineState::Reducing(length));
        StageStarted {
            length,
            bucket_size: bucket.len(),
            previous_size: chain.surviving.len(),
        }
        .log();

        let stage_started = Instant::now();
        let surviving = self
            .executor
            .reduce_stage(bucket.clone(), chain.surviving.clone(), &self.cancel)
            .await
            .map_err(|error| PipelineError::from_stage(length, error))?;
        let elapsed = stage_started.elapsed();

        StageCompleted {
            length,
            bucket_size: bucket.len(),
            surviving: surviving.len(),
            duration: elapsed,
        }
        .log();

        chain.reports.push(StageReport {
            length,
            bucket_size: bucket.len(),
            surviving: surviving.len(),
            elapsed_ms: elapsed.as_millis() as u64,
        });
        chain.surviving = Arc::new(surviving);
        Ok(chain)
    }

    fn check_cancelled(&self, phase: PipelinePhase) -> Result<(), PipelineError> {
        if self.cancel.is_cancelled() {
            Err(PipelineError::Cancelled { phase })
        } else {
            Ok(())
        }
    }

    fn transition(&self, state: PipelineState) {
        PipelineStateChanged { state: &state }.log();
        self.state.send_replace(state);
    }
}
