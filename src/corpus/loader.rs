// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Corpus loaders for local files, HTTP word lists and in-memory lines.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::config::{CorpusOptions, SourceConfig};
use crate::corpus::Corpus;
use crate::errors::LoadError;
use crate::traits::CorpusLoader;

/// Build the loader for a configured source
pub fn loader_for(source: &SourceConfig, options: &CorpusOptions) -> Box<dyn CorpusLoader> {
    match source {
        SourceConfig::File(path) => Box::new(FileCorpusLoader::new(path.clone(), options.clone())),
        SourceConfig::Url(url) => Box::new(HttpCorpusLoader::new(url.clone(), options.clone())),
    }
}

/// Reads a local word list
pub struct FileCorpusLoader {
    path: PathBuf,
    options: CorpusOptions,
}

impl FileCorpusLoader {
    pub fn new(path: impl Into<PathBuf>, options: CorpusOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }
}

#[async_trait]
impl CorpusLoader for FileCorpusLoader {
    async fn load(&self) -> Result<Corpus, LoadError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                source_name: self.describe(),
                source,
            })?;

        Ok(Corpus::from_text(&text, &self.options))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches a word list over HTTP(S)
pub struct HttpCorpusLoader {
    url: String,
    options: CorpusOptions,
    client: reqwest::Client,
}

impl HttpCorpusLoader {
    pub fn new(url: impl Into<String>, options: CorpusOptions) -> Self {
        Self {
            url: url.into(),
            options,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CorpusLoader for HttpCorpusLoader {
    async fn load(&self) -> Result<Corpus, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| LoadError::Http {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|source| LoadError::Http {
            url: self.url.clone(),
            source,
        })?;

        Ok(Corpus::from_text(&text, &self.options))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Serves lines already held in memory
pub struct InMemoryCorpusLoader {
    lines: Vec<String>,
    options: CorpusOptions,
}

impl InMemoryCorpusLoader {
    pub fn new<I, S>(lines: I, options: CorpusOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            options,
        }
    }
}

#[async_trait]
impl CorpusLoader for InMemoryCorpusLoader {
    async fn load(&self) -> Result<Corpus, LoadError> {
        Ok(Corpus::from_lines(&self.lines, &self.options))
    }

    fn describe(&self) -> String {
        format!("in-memory ({} lines)", self.lines.len())
    }
}
