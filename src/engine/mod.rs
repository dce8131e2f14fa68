// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod fold;
pub mod pipeline;
pub mod reducer;
pub mod sequential;
pub mod worker_pool;
#[cfg(test)]
mod integration_tests;

pub use factory::ExecutorFactory;
pub use fold::fold_stages;
pub use pipeline::{Pipeline, PipelineOptions, PipelineOutcome, PipelineState, StageReport};
pub use reducer::{deletions, reduce, SurvivingSet};
pub use sequential::SequentialStageExecutor;
pub use worker_pool::{WorkerPoolStageExecutor, MAX_WORKERS};
