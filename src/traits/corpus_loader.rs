use async_trait::async_trait;

use crate::corpus::Corpus;
use crate::errors::LoadError;

/// A one-shot source of corpus lines.
#[async_trait]
pub trait CorpusLoader: Send + Sync {
    /// Read the whole source and build the corpus.
    async fn load(&self) -> Result<Corpus, LoadError>;

    /// Human readable name of the source, used in logs and errors.
    fn describe(&self) -> String;
}
