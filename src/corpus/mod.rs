// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod buckets;
mod loader;
mod word;

pub use buckets::{bucket, Bucket, BucketIndex};
pub use loader::{loader_for, FileCorpusLoader, HttpCorpusLoader, InMemoryCorpusLoader};
pub use word::{char_len, Corpus, Word};
