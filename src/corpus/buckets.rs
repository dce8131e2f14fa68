// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, HashSet};
use std::ops::RangeInclusive;
use std::sync::{Arc, OnceLock};

use crate::corpus::{char_len, Corpus, Word};
use crate::traits::WordFilter;

/// Distinct corpus words of one length that passed the marker predicate,
/// in first-occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    length: usize,
    words: Vec<Word>,
}

impl Bucket {
    /// Build a bucket directly from words, keeping the first occurrence of each.
    /// Words of another length are ignored.
    pub fn new<I>(length: usize, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(Into::<Word>::into)
            .filter(|w| char_len(w) == length && seen.insert(w.clone()))
            .collect();

        Self { length, words }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.as_ref() == word)
    }
}

/// Select the corpus words of exactly `length` characters that `filter` accepts.
pub fn bucket(corpus: &Corpus, length: usize, filter: &dyn WordFilter) -> Bucket {
    Bucket::new(
        length,
        corpus
            .iter()
            .filter(|w| char_len(w) == length && filter.accepts(w))
            .cloned(),
    )
}

/// Memoized buckets for a contiguous range of lengths.
///
/// Each bucket is computed at most once, either lazily on the first
/// [`get`](BucketIndex::get) or up front with [`materialize`](BucketIndex::materialize).
pub struct BucketIndex {
    corpus: Arc<Corpus>,
    filter: Arc<dyn WordFilter>,
    buckets: BTreeMap<usize, OnceLock<Arc<Bucket>>>,
}

impl BucketIndex {
    pub fn new(
        corpus: Arc<Corpus>,
        lengths: RangeInclusive<usize>,
        filter: Arc<dyn WordFilter>,
    ) -> Self {
        Self {
            corpus,
            filter,
            buckets: lengths.map(|k| (k, OnceLock::new())).collect(),
        }
    }

    /// The bucket for `length`, or `None` when it lies outside the index range
    pub fn get(&self, length: usize) -> Option<Arc<Bucket>> {
        let cell = self.buckets.get(&length)?;
        let bucket = cell.get_or_init(|| {
            Arc::new(bucket(&self.corpus, length, self.filter.as_ref()))
        });
        Some(Arc::clone(bucket))
    }

    /// Build every bucket of the range, in ascending length order
    pub fn materialize(&self) -> Vec<Arc<Bucket>> {
        self.buckets
            .keys()
            .filter_map(|&length| self.get(length))
            .collect()
    }

    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }
}

impl std::fmt::Debug for BucketIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketIndex")
            .field("corpus_size", &self.corpus.len())
            .field("lengths", &self.buckets.keys().collect::<Vec<_>>())
            .field(
                "built",
                &self.buckets.values().filter(|c| c.get().is_some()).count(),
            )
            .finish()
    }
}
