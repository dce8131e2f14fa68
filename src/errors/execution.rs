// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

use super::{ConfigError, LoadError};

/// Errors raised by a stage executor while reducing a single bucket
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Stage for length {length} was cancelled")]
    Cancelled { length: usize },

    #[error("Worker pool has been shut down")]
    PoolClosed,

    #[error("Worker task failed to join: {0}")]
    TaskJoin(String),
}

/// Phase of a pipeline run, used to report where a run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    Configuring,
    Loading,
    Bucketizing,
    Reducing(usize),
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelinePhase::Configuring => write!(f, "configuration"),
            PipelinePhase::Loading => write!(f, "corpus loading"),
            PipelinePhase::Bucketizing => write!(f, "bucketizing"),
            PipelinePhase::Reducing(length) => write!(f, "stage {}", length),
        }
    }
}

/// Terminal error of a pipeline run. No partial result accompanies it.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("corpus loading failed: {0}")]
    Load(#[from] LoadError),

    #[error("stage {length} failed: {source}")]
    Stage {
        length: usize,
        #[source]
        source: ExecutionError,
    },

    #[error("run cancelled during {phase}")]
    Cancelled { phase: PipelinePhase },
}

impl PipelineError {
    /// The phase in which the run failed
    pub fn phase(&self) -> PipelinePhase {
        match self {
            PipelineError::Config(_) => PipelinePhase::Configuring,
            PipelineError::Load(_) => PipelinePhase::Loading,
            PipelineError::Stage { length, .. } => PipelinePhase::Reducing(*length),
            PipelineError::Cancelled { phase } => *phase,
        }
    }

    /// Lift a stage executor error into a run error for the given stage
    pub fn from_stage(length: usize, error: ExecutionError) -> Self {
        match error {
            ExecutionError::Cancelled { length } => PipelineError::Cancelled {
                phase: PipelinePhase::Reducing(length),
            },
            other => PipelineError::Stage {
                length,
                source: other,
            },
        }
    }
}
