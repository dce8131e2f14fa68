// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the word-ladder pipeline. Message types follow a
//! struct-based pattern with a `Display` implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep the wording of a log line next to its structured fields
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - Pipeline lifecycle and stage events
//! * `messages::corpus` - Corpus loading and bucketizing events
//! * `messages::validation` - Configuration validation failures
//!
//! # Usage
//!
//! ```rust
//! use the_wordladder::observability::messages::corpus::CorpusLoadStarted;
//! use the_wordladder::observability::messages::StructuredLog;
//!
//! CorpusLoadStarted { source: "data/sample-words.txt" }.log();
//! ```

pub mod messages;
