#[cfg(test)]
mod integration_tests {
    use std::path::PathBuf;

    use crate::config::{
        load_and_validate_config, CaseNormalization, MarkerPredicate, SourceConfig, Strategy,
    };

    /// The shipped puzzle configuration parses and validates
    #[test]
    fn test_nine_letter_words_yaml_loading() {
        let config = load_and_validate_config("configs/nine-letter-words.yaml").unwrap();

        assert_eq!(config.strategy, Strategy::WorkerPool);
        assert!(matches!(config.source, SourceConfig::Url(ref url) if url.ends_with("scrabble-words.txt")));
        assert_eq!(config.corpus.skip_lines, 2);
        assert_eq!(config.corpus.normalize, CaseNormalization::None);
        assert_eq!(config.min_length, 2);
        assert_eq!(config.max_length, 9);
        assert_eq!(config.seed_words, vec!["A", "I"]);
        assert_eq!(config.marker, MarkerPredicate::ContainsAny(vec!['A', 'I']));
        assert_eq!(config.executor_options.worker_count, Some(7));
        assert_eq!(config.worker_count(), 7);
    }

    #[test]
    fn test_sample_words_yaml_loading() {
        let config = load_and_validate_config("configs/sample-words.yaml").unwrap();

        assert_eq!(
            config.source,
            SourceConfig::File(PathBuf::from("data/sample-words.txt"))
        );
        assert_eq!(config.executor_options.chunk_size, Some(2));
        assert_eq!(config.worker_count(), 2);
    }

    #[test]
    fn test_sequential_toml_loading() {
        let config = load_and_validate_config("configs/sample-words-sequential.toml").unwrap();

        assert_eq!(config.strategy, Strategy::Sequential);
        assert_eq!(config.max_length, 5);
        assert_eq!(config.corpus.skip_lines, 2);
        assert_eq!(config.worker_count(), 1);
    }
}
