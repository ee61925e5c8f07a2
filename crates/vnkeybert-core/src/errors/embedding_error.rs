/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding count mismatch: expected {expected} vectors, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("non-finite value at position {position}")]
    NonFiniteValue { position: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}
