mod config_error;
mod embedding_error;
mod extraction_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use extraction_error::ExtractionError;

/// Top-level error for every fallible public operation.
#[derive(Debug, thiserror::Error)]
pub enum KeyBertError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

impl KeyBertError {
    /// Configuration errors are raised before any collaborator is invoked.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether the call was stopped by its cancellation token or deadline.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Extraction(ExtractionError::Cancelled { .. })
                | Self::Extraction(ExtractionError::DeadlineExceeded { .. })
        )
    }
}

pub type KeyBertResult<T> = Result<T, KeyBertError>;
