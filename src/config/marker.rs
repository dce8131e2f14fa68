// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_MARKER_CHARS;
use crate::config::CaseNormalization;
use crate::traits::WordFilter;
use serde::Deserialize;

/// Configurable bucket filter.
///
/// Beyond its length, a word only enters a bucket when it passes the marker
/// predicate. The nine-letter-word puzzle keeps words containing an `A` or an
/// `I`, since every surviving chain must bottom out in one of those seeds.
///
/// ```yaml
/// marker: any
/// ```
/// ```yaml
/// marker:
///   contains_any: ["A", "I"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPredicate {
    /// Every word passes
    Any,
    /// The word contains at least one of the characters
    ContainsAny(Vec<char>),
    /// The word contains every one of the characters
    ContainsAll(Vec<char>),
}

impl Default for MarkerPredicate {
    fn default() -> Self {
        MarkerPredicate::ContainsAny(DEFAULT_MARKER_CHARS.to_vec())
    }
}

impl MarkerPredicate {
    /// Characters named by the predicate (empty for `Any`)
    pub fn chars(&self) -> &[char] {
        match self {
            MarkerPredicate::Any => &[],
            MarkerPredicate::ContainsAny(chars) | MarkerPredicate::ContainsAll(chars) => chars,
        }
    }

    /// The same predicate with its characters folded by `normalize`, so it
    /// still matches a corpus loaded with that normalization.
    pub fn normalized(&self, normalize: &CaseNormalization) -> MarkerPredicate {
        let folded: Vec<char> = normalize
            .apply(&self.chars().iter().collect::<String>())
            .chars()
            .collect();
        match self {
            MarkerPredicate::Any => MarkerPredicate::Any,
            MarkerPredicate::ContainsAny(_) => MarkerPredicate::ContainsAny(folded),
            MarkerPredicate::ContainsAll(_) => MarkerPredicate::ContainsAll(folded),
        }
    }

    pub fn matches(&self, word: &str) -> bool {
        match self {
            MarkerPredicate::Any => true,
            MarkerPredicate::ContainsAny(chars) => word.chars().any(|c| chars.contains(&c)),
            MarkerPredicate::ContainsAll(chars) => chars.iter().all(|c| word.contains(*c)),
        }
    }
}

impl WordFilter for MarkerPredicate {
    fn accepts(&self, word: &str) -> bool {
        self.matches(word)
    }
}
