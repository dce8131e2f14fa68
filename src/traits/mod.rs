pub mod corpus_loader;
pub mod stage_executor;
pub mod word_filter;

pub use corpus_loader::CorpusLoader;
pub use stage_executor::StageExecutor;
pub use word_filter::WordFilter;
