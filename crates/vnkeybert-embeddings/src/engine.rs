//! EmbeddingEngine: the main entry point for vnkeybert-embeddings.
//!
//! Wraps one provider with the L1 cache, de-duplicates repeated texts,
//! splits cache misses into `batch_size` chunks, and validates every
//! returned vector. Implements `IEmbeddingProvider`.

use std::collections::HashMap;

use tracing::{debug, info};
use vnkeybert_core::config::EmbeddingConfig;
use vnkeybert_core::errors::{EmbeddingError, KeyBertResult};
use vnkeybert_core::traits::IEmbeddingProvider;

use crate::cache::L1MemoryCache;
use crate::providers;
use crate::validation::{validate_count, validate_dimensions};

/// The main embedding engine.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: L1MemoryCache,
    batch_size: usize,
}

impl EmbeddingEngine {
    /// Create an engine from configuration.
    ///
    /// # Errors
    /// Any `ConfigError` from validating `config` or building its provider.
    pub fn new(config: &EmbeddingConfig) -> KeyBertResult<Self> {
        config.validate()?;
        let provider = providers::create_provider(config)?;
        Ok(Self::with_provider(provider, config))
    }

    /// Wrap an already constructed provider.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            batch_size = config.batch_size,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: L1MemoryCache::new(config.l1_cache_size),
            batch_size: config.batch_size.max(1),
        }
    }

    /// Get the active provider name.
    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    /// Number of cached embeddings.
    pub fn cached_entries(&self) -> u64 {
        self.cache.len()
    }

    /// Drop every cached embedding.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn embed_uncached(
        &self,
        texts: &[String],
        keys: &[String],
        pending: &[usize],
        max_length: usize,
        slots: &mut [Option<Vec<f32>>],
    ) -> KeyBertResult<()> {
        let dims = self.provider.dimensions();
        for chunk in pending.chunks(self.batch_size) {
            let batch: Vec<String> = chunk.iter().map(|&i| texts[i].clone()).collect();
            let vectors = self.provider.embed_batch(&batch, max_length)?;
            validate_count(batch.len(), vectors.len())?;

            for (&i, vector) in chunk.iter().zip(vectors) {
                validate_dimensions(&vector, dims)?;
                self.cache.insert(keys[i].clone(), vector.clone());
                slots[i] = Some(vector);
            }
        }
        Ok(())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed_batch(&self, texts: &[String], max_length: usize) -> KeyBertResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        if !self.provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.provider.name().to_string(),
            }
            .into());
        }

        let keys: Vec<String> = texts
            .iter()
            .map(|t| L1MemoryCache::key(t, max_length))
            .collect();

        let mut slots: Vec<Option<Vec<f32>>> = vec![None; texts.len()];
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut pending = Vec::new();
        let mut repeats = Vec::new();

        for (i, key) in keys.iter().enumerate() {
            if let Some(&first) = first_seen.get(key.as_str()) {
                repeats.push((i, first));
                continue;
            }
            first_seen.insert(key.as_str(), i);
            match self.cache.get(key) {
                Some(vector) => slots[i] = Some(vector),
                None => pending.push(i),
            }
        }

        debug!(
            texts = texts.len(),
            hits = texts.len() - pending.len() - repeats.len(),
            misses = pending.len(),
            chunks = pending.len().div_ceil(self.batch_size),
            "embedding batch"
        );

        self.embed_uncached(texts, &keys, &pending, max_length, &mut slots)?;

        for (i, first) in repeats {
            slots[i] = slots[first].clone();
        }

        slots
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| {
                    EmbeddingError::InferenceFailed {
                        reason: "provider skipped an input".to_string(),
                    }
                    .into()
                })
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
