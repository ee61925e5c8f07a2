use crate::errors::KeyBertResult;

/// Embedding generation provider.
///
/// Returns one vector of `dimensions()` floats per input text, in input
/// order. Inputs longer than `max_length` tokens are truncated.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String], max_length: usize) -> KeyBertResult<Vec<Vec<f32>>>;

    /// Embed a single text.
    fn embed(&self, text: &str, max_length: usize) -> KeyBertResult<Vec<f32>> {
        let mut batch = self.embed_batch(&[text.to_string()], max_length)?;
        Ok(batch.pop().unwrap_or_else(|| vec![0.0; self.dimensions()]))
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
