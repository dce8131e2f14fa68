// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for corpus loading and bucketizing.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Corpus loading started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct CorpusLoadStarted<'a> {
    pub source: &'a str,
}

impl Display for CorpusLoadStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loading corpus from {}", self.source)
    }
}

impl StructuredLog for CorpusLoadStarted<'_> {
    fn log(&self) {
        tracing::info!(source = self.source, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("corpus_load", span_name = name, source = self.source)
    }
}

/// Corpus loaded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_wordladder::observability::messages::corpus::CorpusLoaded;
/// use std::time::Duration;
///
/// let msg = CorpusLoaded {
///     source: "data/sample-words.txt",
///     word_count: 23,
///     duration: Duration::from_millis(4),
/// };
///
/// assert_eq!(msg.to_string(), "Loaded 23 words from data/sample-words.txt in 4ms");
/// ```
pub struct CorpusLoaded<'a> {
    pub source: &'a str,
    pub word_count: usize,
    pub duration: Duration,
}

impl Display for CorpusLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} words from {} in {:?}",
            self.word_count, self.source, self.duration
        )
    }
}

impl StructuredLog for CorpusLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            word_count = self.word_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "corpus_loaded",
            span_name = name,
            source = self.source,
            word_count = self.word_count,
        )
    }
}

/// Every bucket in the configured range has been built.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BucketsBuilt {
    pub bucket_count: usize,
    pub bucketed_words: usize,
    pub min_length: usize,
    pub max_length: usize,
}

impl Display for BucketsBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built {} buckets for lengths {}..={} holding {} words",
            self.bucket_count, self.min_length, self.max_length, self.bucketed_words
        )
    }
}

impl StructuredLog for BucketsBuilt {
    fn log(&self) {
        tracing::info!(
            bucket_count = self.bucket_count,
            bucketed_words = self.bucketed_words,
            min_length = self.min_length,
            max_length = self.max_length,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "buckets_built",
            span_name = name,
            bucket_count = self.bucket_count,
            bucketed_words = self.bucketed_words,
        )
    }
}
