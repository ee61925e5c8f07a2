//! Embedding providers and the factory that picks one from config.

mod hashing;

pub use hashing::HashingProvider;

use tracing::debug;
use vnkeybert_core::config::EmbeddingConfig;
use vnkeybert_core::errors::{ConfigError, KeyBertResult};
use vnkeybert_core::traits::IEmbeddingProvider;

/// Build the provider named in `config.provider`.
///
/// # Errors
/// `UnsupportedModel` for an unknown model name, `UnknownProvider` for an
/// unknown provider name.
pub fn create_provider(config: &EmbeddingConfig) -> KeyBertResult<Box<dyn IEmbeddingProvider>> {
    let dimensions = config.dimensions()?;
    match config.provider.as_str() {
        "hashing" => {
            debug!(model = %config.model, dims = dimensions, "using hashing provider");
            Ok(Box::new(HashingProvider::new(dimensions)))
        }
        other => Err(ConfigError::UnknownProvider {
            provider: other.to_string(),
        }
        .into()),
    }
}
