//! Shape checks on provider output.

use vnkeybert_core::errors::{EmbeddingError, KeyBertResult};

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> KeyBertResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}

/// Reject vectors carrying NaN or infinite components.
///
/// # Errors
/// Returns `NonFiniteValue` with the first offending position.
pub fn validate_finite(embedding: &[f32]) -> KeyBertResult<()> {
    match embedding.iter().position(|v| !v.is_finite()) {
        Some(position) => Err(EmbeddingError::NonFiniteValue { position }.into()),
        None => Ok(()),
    }
}

/// Validate that a provider returned one vector per input.
///
/// # Errors
/// Returns `CountMismatch` if the counts differ.
pub fn validate_count(expected: usize, actual: usize) -> KeyBertResult<()> {
    if expected != actual {
        return Err(EmbeddingError::CountMismatch { expected, actual }.into());
    }
    Ok(())
}
