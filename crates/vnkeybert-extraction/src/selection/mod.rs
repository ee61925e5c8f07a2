//! Keyword selection strategies over precomputed embeddings.
//!
//! Every selector takes the document embedding, the candidate embeddings,
//! and the candidate phrases in the same order, and reports each chosen
//! phrase with its document similarity rounded to 4 decimals. Vectors with
//! NaN or infinite components are rejected before scoring.

mod combinations;
mod cosine;
mod max_sum;
mod mmr;

pub use combinations::advance_combination;
pub use cosine::top_n_by_similarity;
pub use max_sum::max_sum_distance;
pub use mmr::maximal_marginal_relevance;

use vnkeybert_core::errors::{ExtractionError, KeyBertResult};
use vnkeybert_core::models::{Keyword, SelectionStrategy};
use vnkeybert_embeddings::validation::validate_finite;

/// Run the selector named by `strategy`.
pub fn select<V: AsRef<[f32]>>(
    strategy: &SelectionStrategy,
    document: &[f32],
    candidates: &[V],
    phrases: &[&str],
    top_n: usize,
) -> KeyBertResult<Vec<Keyword>> {
    match *strategy {
        SelectionStrategy::Cosine => top_n_by_similarity(document, candidates, phrases, top_n),
        SelectionStrategy::MaxSum { nr_candidates } => {
            max_sum_distance(document, candidates, phrases, top_n, nr_candidates)
        }
        SelectionStrategy::Mmr { diversity } => {
            maximal_marginal_relevance(document, candidates, phrases, top_n, diversity)
        }
    }
}

/// Phrases and embeddings must line up, and every vector must be finite.
fn check_inputs<V: AsRef<[f32]>>(
    document: &[f32],
    candidates: &[V],
    phrases: &[&str],
) -> KeyBertResult<()> {
    if candidates.len() != phrases.len() {
        return Err(ExtractionError::MisalignedCandidates {
            phrases: phrases.len(),
            embeddings: candidates.len(),
        }
        .into());
    }
    validate_finite(document)?;
    for candidate in candidates {
        validate_finite(candidate.as_ref())?;
    }
    Ok(())
}
