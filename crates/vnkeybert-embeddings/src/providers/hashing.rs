//! Feature-hashing provider.
//!
//! Generates fixed-dimension vectors by hashing word tokens into buckets and
//! weighting by term frequency. Multi-syllable words (`người_mẫu`) also
//! contribute their syllables, so compounds land near their parts. Works
//! without any model files.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;
use vnkeybert_core::errors::KeyBertResult;
use vnkeybert_core::traits::IEmbeddingProvider;

/// Weight of a syllable feature relative to its whole word.
const SYLLABLE_WEIGHT: f32 = 0.5;

/// Deterministic bag-of-words embedding provider.
pub struct HashingProvider {
    dimensions: usize,
}

impl HashingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercase word tokens, keeping `_` inside segmented words.
    /// Text is NFC-composed first so combining diacritics stay attached.
    fn tokenize(text: &str, max_length: usize) -> Vec<String> {
        let composed: String = text.nfc().collect();
        composed
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .map(|s| s.trim_matches('_'))
            .filter(|s| !s.is_empty())
            .take(max_length)
            .map(str::to_lowercase)
            .collect()
    }

    fn hashed_vector(&self, text: &str, max_length: usize) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return vec;
        }
        let tokens = Self::tokenize(text, max_length);
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in &tf {
            let freq = count / total;
            vec[Self::hash_term(term, self.dimensions)] += freq;
            if term.contains('_') {
                for syllable in term.split('_').filter(|s| !s.is_empty()) {
                    vec[Self::hash_term(syllable, self.dimensions)] += freq * SYLLABLE_WEIGHT;
                }
            }
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IEmbeddingProvider for HashingProvider {
    fn embed_batch(&self, texts: &[String], max_length: usize) -> KeyBertResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| self.hashed_vector(t, max_length))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }

    fn is_available(&self) -> bool {
        true
    }
}
