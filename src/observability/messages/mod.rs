// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its level with machine-readable fields.
//!
//! # Organization
//!
//! * `engine` - Pipeline lifecycle, state transitions and stage events
//! * `corpus` - Corpus loading and bucketizing events
//! * `validation` - Configuration validation failures
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_wordladder::observability::messages::engine::PipelineStarted;
//! use the_wordladder::observability::messages::StructuredLog;
//!
//! let msg = PipelineStarted {
//!     strategy: "WorkerPool",
//!     min_length: 2,
//!     max_length: 9,
//!     worker_count: 7,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod corpus;
pub mod engine;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event
    fn log(&self);

    /// Open a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
