/// End-to-end runs of the shipped configurations against the sample word list
#[cfg(test)]
mod tests {
    use crate::config::{load_and_validate_config, RuntimeBuilder};
    use crate::engine::PipelineState;

    #[tokio::test]
    async fn test_sample_words_worker_pool_run() {
        let config = load_and_validate_config("configs/sample-words.yaml").unwrap();
        let (loader, pipeline) = RuntimeBuilder::pipeline_from_config(&config).unwrap();
        let state = pipeline.subscribe();

        let outcome = pipeline.run(loader.as_ref()).await.unwrap();

        assert_eq!(outcome.words, vec!["STARTLING"]);
        // 23 words after the two header lines
        assert_eq!(outcome.corpus_size, 23);

        let bucket_sizes: Vec<usize> = outcome.stages.iter().map(|s| s.bucket_size).collect();
        let surviving: Vec<usize> = outcome.stages.iter().map(|s| s.surviving).collect();
        assert_eq!(bucket_sizes, vec![5, 3, 4, 2, 1, 1, 1, 2]);
        assert_eq!(surviving, vec![5, 3, 4, 2, 1, 1, 1, 1]);
        assert_eq!(*state.borrow(), PipelineState::Done);
    }

    #[tokio::test]
    async fn test_sample_words_sequential_run() {
        let config = load_and_validate_config("configs/sample-words-sequential.toml").unwrap();
        let (loader, pipeline) = RuntimeBuilder::pipeline_from_config(&config).unwrap();

        let outcome = pipeline.run(loader.as_ref()).await.unwrap();

        assert_eq!(outcome.final_length, 5);
        assert_eq!(outcome.words, vec!["SPLIT", "STING"]);
    }

    #[tokio::test]
    async fn test_strategies_agree_on_sample_words() {
        let pool_config = load_and_validate_config("configs/sample-words.yaml").unwrap();
        let mut sequential_config = load_and_validate_config("configs/sample-words.yaml").unwrap();
        sequential_config.strategy = crate::config::Strategy::Sequential;

        let (pool_loader, pool) = RuntimeBuilder::pipeline_from_config(&pool_config).unwrap();
        let (seq_loader, sequential) =
            RuntimeBuilder::pipeline_from_config(&sequential_config).unwrap();

        let pool_outcome = pool.run(pool_loader.as_ref()).await.unwrap();
        let seq_outcome = sequential.run(seq_loader.as_ref()).await.unwrap();

        assert_eq!(pool_outcome.words, seq_outcome.words);
        let pool_counts: Vec<usize> = pool_outcome.stages.iter().map(|s| s.surviving).collect();
        let seq_counts: Vec<usize> = seq_outcome.stages.iter().map(|s| s.surviving).collect();
        assert_eq!(pool_counts, seq_counts);
    }
}
