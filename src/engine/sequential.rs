// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::corpus::Bucket;
use crate::engine::reducer::reduce_slice;
use crate::engine::SurvivingSet;
use crate::errors::ExecutionError;
use crate::traits::StageExecutor;

/// Reduces each bucket on the calling task, one word after another.
///
/// Useful as a baseline and for small corpora where scheduling chunks costs
/// more than it saves.
#[derive(Debug, Default)]
pub struct SequentialStageExecutor {
    closed: AtomicBool,
}

impl SequentialStageExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StageExecutor for SequentialStageExecutor {
    async fn reduce_stage(
        &self,
        bucket: Arc<Bucket>,
        previous: Arc<SurvivingSet>,
        cancel: &CancellationToken,
    ) -> Result<SurvivingSet, ExecutionError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(ExecutionError::PoolClosed);
        }

        let found = reduce_slice(bucket.words(), &previous, cancel)?;
        Ok(SurvivingSet::new(bucket.length(), found.into_iter().collect()))
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }

    fn worker_count(&self) -> usize {
        1
    }

    fn shutdown(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reduces_bucket() {
        let executor = SequentialStageExecutor::new();
        let bucket = Arc::new(Bucket::new(2, ["AI", "AM", "ZZ"]));
        let previous = Arc::new(SurvivingSet::seed(1, ["A", "I"]));

        let surviving = executor
            .reduce_stage(bucket, previous, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(surviving, SurvivingSet::seed(2, ["AI", "AM"]));
    }

    #[tokio::test]
    async fn test_cancelled_token_fails_stage() {
        let executor = SequentialStageExecutor::new();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = executor
            .reduce_stage(
                Arc::new(Bucket::new(2, ["AI"])),
                Arc::new(SurvivingSet::seed(1, ["A"])),
                &cancel,
            )
            .await;

        assert!(matches!(result, Err(ExecutionError::Cancelled { length: 2 })));
    }

    #[tokio::test]
    async fn test_shutdown_rejects_new_stages() {
        let executor = SequentialStageExecutor::new();
        executor.shutdown();

        let result = executor
            .reduce_stage(
                Arc::new(Bucket::new(2, ["AI"])),
                Arc::new(SurvivingSet::seed(1, ["A"])),
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(result, Err(ExecutionError::PoolClosed)));
    }
}
