// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod marker;
mod runtime;
mod validation;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use loader::{
    default_worker_count, load_and_validate_config, load_config, CaseNormalization, Config,
    CorpusOptions, ExecutorOptions, SourceConfig, Strategy,
};
pub use marker::MarkerPredicate;
pub use runtime::RuntimeBuilder;
pub use validation::validate_config;
