// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for corpus loading.

use thiserror::Error;

/// The corpus source could not be reached or read. Without a corpus the
/// pipeline cannot proceed, so every variant is fatal.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read corpus from '{source_name}': {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch corpus from '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Corpus request to '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}
