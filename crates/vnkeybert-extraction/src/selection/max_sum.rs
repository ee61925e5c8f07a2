use tracing::debug;
use vnkeybert_core::errors::KeyBertResult;
use vnkeybert_core::models::Keyword;

use super::{advance_combination, check_inputs};
use crate::similarity::{pairwise_similarity, ranked_indices, similarity_to};

/// Max Sum Distance selection.
///
/// Restricts the search to the `nr_candidates` phrases most similar to the
/// document, then returns the `top_n` subset of that pool whose summed
/// pairwise similarity is lowest. Every C(pool, top_n) subset is scored at
/// O(top_n²) each, so callers bound both values (see
/// `ExtractionConfig::validate`).
///
/// The pool is ordered by descending document similarity and subsets are
/// enumerated lexicographically over it, so the first of several equally
/// diverse subsets wins and the output comes out best-scoring first.
/// `nr_candidates` is clamped to the candidate count and `top_n` to the pool.
pub fn max_sum_distance<V: AsRef<[f32]>>(
    document: &[f32],
    candidates: &[V],
    phrases: &[&str],
    top_n: usize,
    nr_candidates: usize,
) -> KeyBertResult<Vec<Keyword>> {
    check_inputs(document, candidates, phrases)?;
    let sims = similarity_to(document, candidates);
    let pool: Vec<usize> = ranked_indices(&sims)
        .into_iter()
        .take(nr_candidates.min(candidates.len()))
        .collect();

    let k = top_n.min(pool.len());
    if k < top_n {
        debug!(top_n, pool = pool.len(), "candidate pool smaller than top_n, clamping");
    }
    if k == 0 {
        return Ok(Vec::new());
    }

    let pool_vectors: Vec<&[f32]> = pool.iter().map(|&i| candidates[i].as_ref()).collect();
    let pair_sim = pairwise_similarity(&pool_vectors);

    let mut combo: Vec<usize> = (0..k).collect();
    let mut best = combo.clone();
    let mut best_sum = f64::INFINITY;
    loop {
        let sum = pair_sum(&pair_sim, &combo);
        if sum < best_sum {
            best_sum = sum;
            best.clone_from(&combo);
        }
        if !advance_combination(&mut combo, pool.len()) {
            break;
        }
    }

    Ok(best
        .into_iter()
        .map(|p| {
            let i = pool[p];
            Keyword::new(phrases[i], sims[i])
        })
        .collect())
}

/// Sum of similarities over each unordered pair in `members`.
fn pair_sum(pair_sim: &[Vec<f64>], members: &[usize]) -> f64 {
    let mut sum = 0.0;
    for (a, &i) in members.iter().enumerate() {
        for &j in &members[a + 1..] {
            sum += pair_sim[i][j];
        }
    }
    sum
}
