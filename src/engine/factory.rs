// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Config, Strategy};
use crate::engine::sequential::SequentialStageExecutor;
use crate::engine::worker_pool::WorkerPoolStageExecutor;
use crate::traits::StageExecutor;

/// Factory for creating stage executors from configuration
pub struct ExecutorFactory;

impl ExecutorFactory {
    /// Create a stage executor based on the configuration strategy
    pub fn from_config(cfg: &Config) -> Box<dyn StageExecutor> {
        match cfg.strategy {
            Strategy::Sequential => Box::new(SequentialStageExecutor::new()),
            Strategy::WorkerPool => Box::new(WorkerPoolStageExecutor::new(
                cfg.worker_count(),
                cfg.executor_options.chunk_size,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExecutorOptions;

    #[test]
    fn test_strategy_selects_executor() {
        let sequential = ExecutorFactory::from_config(&Config {
            strategy: Strategy::Sequential,
            ..Config::default()
        });
        assert_eq!(sequential.name(), "Sequential");
        assert_eq!(sequential.worker_count(), 1);

        let pool = ExecutorFactory::from_config(&Config {
            executor_options: ExecutorOptions {
                worker_count: Some(7),
                chunk_size: None,
            },
            ..Config::default()
        });
        assert_eq!(pool.name(), "WorkerPool");
        assert_eq!(pool.worker_count(), 7);
    }
}
