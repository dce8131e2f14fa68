// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-stage reduction.
//!
//! A word of length k survives when deleting any one of its characters gives
//! a member of the surviving set of length k-1. Membership is a hash lookup,
//! so a stage costs O(|bucket| * k) lookups regardless of how large the
//! previous set is.

use std::collections::HashSet;
use tokio_util::sync::CancellationToken;

use crate::corpus::{Bucket, Word};
use crate::errors::ExecutionError;

/// Words of one length confirmed reachable from the stage below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurvivingSet {
    length: usize,
    words: HashSet<Word>,
}

impl SurvivingSet {
    pub fn new(length: usize, words: HashSet<Word>) -> Self {
        Self { length, words }
    }

    /// The configured starting set, taken as valid without reduction
    pub fn seed<I>(length: usize, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        Self {
            length,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty(length: usize) -> Self {
        Self {
            length,
            words: HashSet::new(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// True when every surviving word is a member of `bucket`
    pub fn is_subset_of(&self, bucket: &Bucket) -> bool {
        let members: HashSet<&str> = bucket.words().iter().map(|w| w.as_ref()).collect();
        self.words.iter().all(|w| members.contains(w.as_ref()))
    }

    /// Members in ascending order, for presentation
    pub fn sorted(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}

/// Every word obtained by deleting exactly one character of `word`, by index.
/// A word with repeated letters yields repeated candidates.
pub fn deletions(word: &str) -> impl Iterator<Item = String> + '_ {
    word.char_indices().map(move |(index, c)| {
        let mut candidate = String::with_capacity(word.len() - c.len_utf8());
        candidate.push_str(&word[..index]);
        candidate.push_str(&word[index + c.len_utf8()..]);
        candidate
    })
}

/// Whether any single-character deletion of `word` is in `previous`
pub fn survives(word: &str, previous: &SurvivingSet) -> bool {
    deletions(word).any(|candidate| previous.contains(&candidate))
}

/// Reduce a whole bucket against the previous stage's survivors.
pub fn reduce(bucket: &Bucket, previous: &SurvivingSet) -> SurvivingSet {
    let words = bucket
        .words()
        .iter()
        .filter(|w| survives(w, previous))
        .cloned()
        .collect();

    SurvivingSet::new(bucket.length(), words)
}

/// Reduce a slice of a bucket into a private buffer, checking `cancel`
/// before each word.
pub fn reduce_slice(
    words: &[Word],
    previous: &SurvivingSet,
    cancel: &CancellationToken,
) -> Result<Vec<Word>, ExecutionError> {
    let mut found = Vec::new();
    for word in words {
        if cancel.is_cancelled() {
            return Err(ExecutionError::Cancelled {
                length: previous.length() + 1,
            });
        }
        if survives(word, previous) {
            found.push(word.clone());
        }
    }
    Ok(found)
}
