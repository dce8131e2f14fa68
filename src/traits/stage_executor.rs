use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::corpus::Bucket;
use crate::engine::SurvivingSet;
use crate::errors::ExecutionError;

#[async_trait]
pub trait StageExecutor: Send + Sync {
    /// Reduce one bucket against the previous stage's survivors.
    ///
    /// - `bucket`: words of length k that passed the marker predicate
    /// - `previous`: surviving set of length k-1
    /// - `cancel`: when triggered, outstanding work stops and the stage
    ///   fails with `ExecutionError::Cancelled`
    ///
    /// Returns only once every word of the bucket has been evaluated; that
    /// join is the barrier between consecutive stages.
    async fn reduce_stage(
        &self,
        bucket: Arc<Bucket>,
        previous: Arc<SurvivingSet>,
        cancel: &CancellationToken,
    ) -> Result<SurvivingSet, ExecutionError>;

    /// Strategy name for logs
    fn name(&self) -> &'static str;

    /// Degree of parallelism within a stage
    fn worker_count(&self) -> usize;

    /// Release the executor's workers. Stages started afterwards fail.
    fn shutdown(&self) {}
}
