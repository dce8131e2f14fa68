// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::CorpusOptions;

/// An immutable word. Shared between the corpus, buckets and surviving sets
/// without copying; equality and hashing are by exact content.
pub type Word = Arc<str>;

/// Length of a word in characters (Unicode scalar values), which is how
/// words are bucketed and how deletions are indexed.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// The loaded word list, in source order. Duplicates are kept; buckets
/// deduplicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from raw lines.
    ///
    /// The first `skip_lines` lines are treated as a header and dropped, every
    /// remaining line is trimmed, blank lines are ignored and the configured
    /// case normalization is applied.
    pub fn from_lines<I, S>(lines: I, options: &CorpusOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .skip(options.skip_lines)
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Word::from(options.normalize.apply(trimmed)))
                }
            })
            .collect();

        Self { words }
    }

    /// Build a corpus from a whole text document, one word per line.
    pub fn from_text(text: &str, options: &CorpusOptions) -> Self {
        Self::from_lines(text.lines(), options)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for Corpus {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CaseNormalization;

    #[test]
    fn test_from_lines_trims_and_drops_blanks() {
        let corpus = Corpus::from_text("AT\r\n  IT \n\n\nAM\n", &CorpusOptions::default());
        let words: Vec<&str> = corpus.iter().map(|w| w.as_ref()).collect();
        assert_eq!(words, vec!["AT", "IT", "AM"]);
    }

    #[test]
    fn test_header_lines_are_skipped() {
        let options = CorpusOptions {
            skip_lines: 2,
            ..CorpusOptions::default()
        };
        let corpus = Corpus::from_text("Collins Scrabble Words (2019)\n\nAA\nAB\n", &options);
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let corpus = Corpus::from_lines(["AT", "AT", "IT"], &CorpusOptions::default());
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_normalization() {
        let options = CorpusOptions {
            normalize: CaseNormalization::Uppercase,
            ..CorpusOptions::default()
        };
        let corpus = Corpus::from_lines(["at", "It"], &options);
        let words: Vec<&str> = corpus.iter().map(|w| w.as_ref()).collect();
        assert_eq!(words, vec!["AT", "IT"]);
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!(char_len("ÉTÉ"), 3);
        assert_eq!(char_len(""), 0);
    }
}
