// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::config::consts::{CHUNKS_PER_WORKER, MIN_CHUNK_SIZE};
use crate::corpus::{Bucket, Word};
use crate::engine::reducer::reduce_slice;
use crate::engine::SurvivingSet;
use crate::errors::ExecutionError;
use crate::observability::messages::engine::StageScheduled;
use crate::observability::messages::StructuredLog;
use crate::traits::StageExecutor;

/// Largest pool the permit semaphore can hold
pub const MAX_WORKERS: usize = Semaphore::MAX_PERMITS;

/// Fixed-size worker pool that reduces a bucket in parallel chunks.
///
/// ## Execution Strategy
///
/// 1. The bucket is split into contiguous chunks of `chunk_size` words
/// 2. One task per chunk waits for a pool permit, so at most `worker_count`
///    chunks are reduced at once
/// 3. Each chunk is reduced on a blocking thread into its own buffer; the
///    bucket and the previous surviving set are shared read-only through `Arc`
/// 4. After every task has joined, the buffers are merged into the stage's
///    surviving set on the calling task
///
/// The join in step 4 is the barrier between stages. The first failing chunk
/// cancels the rest of its stage.
///
/// ## Lifecycle
///
/// The pool is created once per run and shut down explicitly with
/// [`StageExecutor::shutdown`], which closes the permit semaphore. Stages
/// started after shutdown fail with `ExecutionError::PoolClosed`.
pub struct WorkerPoolStageExecutor {
    worker_count: usize,
    chunk_size: Option<usize>,
    permits: Arc<Semaphore>,
}

impl WorkerPoolStageExecutor {
    /// Create a pool with `worker_count` workers, clamped to `1..=MAX_WORKERS`.
    /// `chunk_size` fixes the words per task; `None` derives it from each
    /// bucket's size.
    pub fn new(worker_count: usize, chunk_size: Option<usize>) -> Self {
        let worker_count = worker_count.clamp(1, MAX_WORKERS);
        Self {
            worker_count,
            chunk_size: chunk_size.map(|size| size.max(1)),
            permits: Arc::new(Semaphore::new(worker_count)),
        }
    }

    /// Create a pool with one worker per available CPU core
    pub fn with_available_parallelism() -> Self {
        Self::new(crate::config::default_worker_count(), None)
    }

    fn chunk_size_for(&self, bucket_len: usize) -> usize {
        self.chunk_size.unwrap_or_else(|| {
            bucket_len
                .div_ceil(self.worker_count * CHUNKS_PER_WORKER)
                .max(MIN_CHUNK_SIZE)
        })
    }
}

#[async_trait]
impl StageExecutor for WorkerPoolStageExecutor {
    async fn reduce_stage(
        &self,
        bucket: Arc<Bucket>,
        previous: Arc<SurvivingSet>,
        cancel: &CancellationToken,
    ) -> Result<SurvivingSet, ExecutionError> {
        let length = bucket.length();

        if self.permits.is_closed() {
            return Err(ExecutionError::PoolClosed);
        }
        if cancel.is_cancelled() {
            return Err(ExecutionError::Cancelled { length });
        }
        // Nothing can survive against an empty previous stage
        if bucket.is_empty() || previous.is_empty() {
            return Ok(SurvivingSet::empty(length));
        }

        let chunk_size = self.chunk_size_for(bucket.len());
        let chunk_count = bucket.len().div_ceil(chunk_size);
        StageScheduled {
            length,
            chunk_count,
            chunk_size,
            worker_count: self.worker_count,
        }
        .log();

        let stage_cancel = cancel.child_token();
        let mut tasks = Vec::with_capacity(chunk_count);

        for chunk_index in 0..chunk_count {
            let start = chunk_index * chunk_size;
            let end = (start + chunk_size).min(bucket.len());

            let bucket_clone = bucket.clone();
            let previous_clone = previous.clone();
            let permits_clone = self.permits.clone();
            let cancel_clone = stage_cancel.clone();

            let task = tokio::spawn(async move {
                let _permit = permits_clone
                    .acquire_owned()
                    .await
                    .map_err(|_| ExecutionError::PoolClosed)?;

                if cancel_clone.is_cancelled() {
                    return Err(ExecutionError::Cancelled { length });
                }

                tokio::task::spawn_blocking(move || {
                    reduce_slice(
                        &bucket_clone.words()[start..end],
                        &previous_clone,
                        &cancel_clone,
                    )
                })
                .await
                .map_err(|join_error| ExecutionError::TaskJoin(join_error.to_string()))?
            });

            tasks.push(task);
        }

        // Wait for every chunk, even after a failure, so no worker outlives its stage
        let mut words: HashSet<Word> = HashSet::with_capacity(bucket.len());
        let mut first_error = None;
        for task in tasks {
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(join_error) => Err(ExecutionError::TaskJoin(join_error.to_string())),
            };

            match outcome {
                Ok(found) => words.extend(found),
                Err(error) => {
                    if first_error.is_none() {
                        stage_cancel.cancel();
                        first_error = Some(error);
                    }
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(SurvivingSet::new(length, words)),
        }
    }

    fn name(&self) -> &'static str {
        "WorkerPool"
    }

    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn shutdown(&self) {
        self.permits.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reducer::reduce;
    use crate::engine::SequentialStageExecutor;

    /// Every two-letter combination of A..=J, plus three-letter words built on them
    fn generated_buckets() -> (Bucket, Bucket) {
        let letters: Vec<char> = ('A'..='J').collect();
        let mut two = Vec::new();
        for a in &letters {
            for b in &letters {
                two.push(format!("{}{}", a, b));
            }
        }
        let mut three = Vec::new();
        for word in &two {
            for c in ['A', 'Q', 'Z'] {
                three.push(format!("{}{}", word, c));
            }
        }
        (Bucket::new(2, two), Bucket::new(3, three))
    }

    #[tokio::test]
    async fn test_matches_sequential_reduction() {
        let (two, three) = generated_buckets();
        let seed = SurvivingSet::seed(1, ["A", "I"]);
        let surviving_two = Arc::new(reduce(&two, &seed));

        let pool = WorkerPoolStageExecutor::new(4, Some(7));
        let sequential = SequentialStageExecutor::new();
        let cancel = CancellationToken::new();

        let parallel = pool
            .reduce_stage(Arc::new(three.clone()), surviving_two.clone(), &cancel)
            .await
            .unwrap();
        let expected = sequential
            .reduce_stage(Arc::new(three.clone()), surviving_two.clone(), &cancel)
            .await
            .unwrap();

        assert_eq!(parallel, expected);
        assert!(parallel.is_subset_of(&three));
        assert!(!parallel.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let (two, _) = generated_buckets();
        let seed = Arc::new(SurvivingSet::seed(1, ["A", "I"]));
        let bucket = Arc::new(two);
        let pool = WorkerPoolStageExecutor::new(3, Some(5));
        let cancel = CancellationToken::new();

        let first = pool
            .reduce_stage(bucket.clone(), seed.clone(), &cancel)
            .await
            .unwrap();
        let second = pool.reduce_stage(bucket, seed, &cancel).await.unwrap();

        assert_eq!(first, second);
        // Every word with an A or an I: 100 words minus the 8x8 without either
        assert_eq!(first.len(), 100 - 64);
    }

    #[test]
    fn test_worker_count_is_clamped_to_pool_capacity() {
        assert_eq!(WorkerPoolStageExecutor::new(usize::MAX, None).worker_count(), MAX_WORKERS);
        assert_eq!(WorkerPoolStageExecutor::new(0, None).worker_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_previous_short_circuits() {
        let pool = WorkerPoolStageExecutor::new(2, None);
        let surviving = pool
            .reduce_stage(
                Arc::new(Bucket::new(3, ["SIT"])),
                Arc::new(SurvivingSet::empty(2)),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(surviving.is_empty());
        assert_eq!(surviving.length(), 3);
    }

    #[tokio::test]
    async fn test_cancelled_token_fails_stage() {
        let pool = WorkerPoolStageExecutor::new(2, Some(1));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = pool
            .reduce_stage(
                Arc::new(Bucket::new(2, ["AI", "AT"])),
                Arc::new(SurvivingSet::seed(1, ["A"])),
                &cancel,
            )
            .await;

        assert!(matches!(result, Err(ExecutionError::Cancelled { length: 2 })));
    }

    #[tokio::test]
    async fn test_shutdown_closes_pool() {
        let pool = WorkerPoolStageExecutor::new(2, None);
        pool.shutdown();

        let result = pool
            .reduce_stage(
                Arc::new(Bucket::new(2, ["AI"])),
                Arc::new(SurvivingSet::seed(1, ["A"])),
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(result, Err(ExecutionError::PoolClosed)));
    }

    #[test]
    fn test_chunk_size_derivation() {
        let pool = WorkerPoolStageExecutor::new(4, None);
        assert_eq!(pool.chunk_size_for(10), MIN_CHUNK_SIZE);
        assert_eq!(pool.chunk_size_for(16_000), 1_000);

        let fixed = WorkerPoolStageExecutor::new(4, Some(0));
        assert_eq!(fixed.chunk_size_for(16_000), 1);
        assert_eq!(WorkerPoolStageExecutor::new(0, None).worker_count(), 1);
    }
}
