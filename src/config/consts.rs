/// Shortest bucket built by default; length 1 is the seed stage
pub const DEFAULT_MIN_LENGTH: usize = 2;
/// Target length of the default run (the nine-letter-word puzzle)
pub const DEFAULT_MAX_LENGTH: usize = 9;
/// Seed surviving set for the stage below `DEFAULT_MIN_LENGTH`
pub const DEFAULT_SEED_WORDS: &[&str] = &["A", "I"];
/// Marker characters a bucketed word must contain at least one of
pub const DEFAULT_MARKER_CHARS: &[char] = &['A', 'I'];
/// Scrabble word list used when no source is configured
pub const DEFAULT_CORPUS_URL: &str =
    "https://raw.githubusercontent.com/nikiiv/JavaCodingTestOne/master/scrabble-words.txt";
/// Header lines at the top of the default word list
pub const DEFAULT_CORPUS_HEADER_LINES: usize = 2;
/// Worker count used when available parallelism cannot be detected
pub const FALLBACK_WORKER_COUNT: usize = 4;
/// Chunks per worker the pool aims for when no chunk size is configured
pub const CHUNKS_PER_WORKER: usize = 4;
/// Lower bound on derived chunk sizes; tiny chunks cost more to schedule than to reduce
pub const MIN_CHUNK_SIZE: usize = 64;
