// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline lifecycle and stage events.
//!
//! This module contains message types for logging events related to:
//! * Run start, completion and failure
//! * State transitions of the orchestrator
//! * Per-stage reduction progress and chunk scheduling

use crate::engine::PipelineState;
use crate::errors::{PipelineError, PipelinePhase};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Run started with the given strategy and bucket range.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_wordladder::observability::messages::engine::PipelineStarted;
///
/// let msg = PipelineStarted {
///     strategy: "WorkerPool",
///     min_length: 2,
///     max_length: 9,
///     worker_count: 7,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Starting word ladder run with WorkerPool strategy: lengths 2..=9, worker_count=7"
/// );
/// ```
pub struct PipelineStarted<'a> {
    pub strategy: &'a str,
    pub min_length: usize,
    pub max_length: usize,
    pub worker_count: usize,
}

impl Display for PipelineStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting word ladder run with {} strategy: lengths {}..={}, worker_count={}",
            self.strategy, self.min_length, self.max_length, self.worker_count
        )
    }
}

impl StructuredLog for PipelineStarted<'_> {
    fn log(&self) {
        tracing::info!(
            strategy = self.strategy,
            min_length = self.min_length,
            max_length = self.max_length,
            worker_count = self.worker_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            strategy = self.strategy,
            min_length = self.min_length,
            max_length = self.max_length,
            worker_count = self.worker_count,
        )
    }
}

/// The orchestrator moved to a new state.
///
/// # Log Level
/// `debug!` - Progress detail
pub struct PipelineStateChanged<'a> {
    pub state: &'a PipelineState,
}

impl Display for PipelineStateChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline state: {}", self.state)
    }
}

impl StructuredLog for PipelineStateChanged<'_> {
    fn log(&self) {
        tracing::debug!(state = %self.state, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("pipeline_state", span_name = name, state = %self.state)
    }
}

/// A reduction stage started.
///
/// # Log Level
/// `debug!` - Progress detail
pub struct StageStarted {
    pub length: usize,
    pub bucket_size: usize,
    pub previous_size: usize,
}

impl Display for StageStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Reducing {} words of length {} against {} survivors of length {}",
            self.bucket_size,
            self.length,
            self.previous_size,
            self.length.saturating_sub(1)
        )
    }
}

impl StructuredLog for StageStarted {
    fn log(&self) {
        tracing::debug!(
            length = self.length,
            bucket_size = self.bucket_size,
            previous_size = self.previous_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stage",
            span_name = name,
            length = self.length,
            bucket_size = self.bucket_size,
        )
    }
}

/// A stage's bucket was split into chunks for the worker pool.
///
/// # Log Level
/// `trace!` - Scheduling detail
pub struct StageScheduled {
    pub length: usize,
    pub chunk_count: usize,
    pub chunk_size: usize,
    pub worker_count: usize,
}

impl Display for StageScheduled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage {} split into {} chunks of up to {} words across {} workers",
            self.length, self.chunk_count, self.chunk_size, self.worker_count
        )
    }
}

impl StructuredLog for StageScheduled {
    fn log(&self) {
        tracing::trace!(
            length = self.length,
            chunk_count = self.chunk_count,
            chunk_size = self.chunk_size,
            worker_count = self.worker_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "stage_scheduled",
            span_name = name,
            length = self.length,
            chunk_count = self.chunk_count,
        )
    }
}

/// A reduction stage finished.
///
/// # Log Level
/// `info!` - One line per stage, the run's progress report
pub struct StageCompleted {
    pub length: usize,
    pub bucket_size: usize,
    pub surviving: usize,
    pub duration: Duration,
}

impl Display for StageCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage {}: {} of {} words survive one-letter removal ({:?})",
            self.length, self.surviving, self.bucket_size, self.duration
        )
    }
}

impl StructuredLog for StageCompleted {
    fn log(&self) {
        tracing::info!(
            length = self.length,
            bucket_size = self.bucket_size,
            surviving = self.surviving,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "stage_completed",
            span_name = name,
            length = self.length,
            surviving = self.surviving,
            duration = ?self.duration,
        )
    }
}

/// Run completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineCompleted {
    pub final_length: usize,
    pub surviving: usize,
    pub duration: Duration,
}

impl Display for PipelineCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Word ladder run completed: {} words of length {} in {:?}",
            self.surviving, self.final_length, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted {
    fn log(&self) {
        tracing::info!(
            final_length = self.final_length,
            surviving = self.surviving,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_completed",
            span_name = name,
            final_length = self.final_length,
            surviving = self.surviving,
        )
    }
}

/// Run failed; no partial result is produced.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PipelineFailed<'a> {
    pub phase: PipelinePhase,
    pub error: &'a PipelineError,
}

impl Display for PipelineFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Word ladder run failed during {}: {}", self.phase, self.error)
    }
}

impl StructuredLog for PipelineFailed<'_> {
    fn log(&self) {
        tracing::error!(
            phase = %self.phase,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "pipeline_failed",
            span_name = name,
            phase = %self.phase,
        )
    }
}
