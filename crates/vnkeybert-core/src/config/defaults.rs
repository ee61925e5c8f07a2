// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_PROVIDER: &str = "hashing";
pub const DEFAULT_MODEL: &str = "vinai/phobert-base";
pub const DEFAULT_MAX_LENGTH: usize = 150;
/// Inclusive upper bound on `max_length`; the PhoBERT position table caps inputs below 255.
pub const MAX_MAX_LENGTH: usize = 254;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 50;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

// --- Extraction ---
pub const DEFAULT_NGRAM_MIN: usize = 1;
pub const DEFAULT_NGRAM_MAX: usize = 1;
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_MIN_DF: usize = 1;
pub const DEFAULT_DIVERSITY: f64 = 0.5;
pub const DEFAULT_NR_CANDIDATES: usize = 20;
pub const DEFAULT_MAX_NR_CANDIDATES: usize = 100;
pub const DEFAULT_MAX_COMBINATIONS: u64 = 1_000_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "VNKEYBERT_LOG";
