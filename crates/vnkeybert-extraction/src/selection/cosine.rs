use vnkeybert_core::errors::KeyBertResult;
use vnkeybert_core::models::Keyword;

use super::check_inputs;
use crate::similarity::{ranked_indices, similarity_to};

/// The `top_n` candidates most similar to the document, best first.
///
/// Returns `min(top_n, candidates.len())` keywords; equal scores keep
/// candidate order.
pub fn top_n_by_similarity<V: AsRef<[f32]>>(
    document: &[f32],
    candidates: &[V],
    phrases: &[&str],
    top_n: usize,
) -> KeyBertResult<Vec<Keyword>> {
    check_inputs(document, candidates, phrases)?;
    let sims = similarity_to(document, candidates);
    Ok(ranked_indices(&sims)
        .into_iter()
        .take(top_n)
        .map(|i| Keyword::new(phrases[i], sims[i]))
        .collect())
}
