use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Embedding models the extractor accepts, with their hidden size.
pub const SUPPORTED_MODELS: &[(&str, usize)] =
    &[("vinai/phobert-base", 768), ("vinai/phobert-large", 1024)];

/// Embedding subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "hashing".
    pub provider: String,
    /// Model name; determines the embedding dimensionality.
    pub model: String,
    /// Maximum number of tokens per embedded text.
    pub max_length: usize,
    /// Batch size for provider calls.
    pub batch_size: usize,
    /// L1 in-memory cache max entries.
    pub l1_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_PROVIDER.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            max_length: defaults::DEFAULT_MAX_LENGTH,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
        }
    }
}

impl EmbeddingConfig {
    /// Embedding dimensionality of the configured model.
    ///
    /// # Errors
    /// Returns `UnsupportedModel` if the model name is not recognised.
    pub fn dimensions(&self) -> Result<usize, ConfigError> {
        SUPPORTED_MODELS
            .iter()
            .find(|(name, _)| *name == self.model)
            .map(|(_, dims)| *dims)
            .ok_or_else(|| ConfigError::UnsupportedModel {
                name: self.model.clone(),
            })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()?;
        if self.max_length == 0 || self.max_length > defaults::MAX_MAX_LENGTH {
            return Err(ConfigError::invalid(
                "max_length",
                format!(
                    "must be between 1 and {}, got {}",
                    defaults::MAX_MAX_LENGTH,
                    self.max_length
                ),
            ));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::invalid("batch_size", "must be at least 1"));
        }
        Ok(())
    }
}
