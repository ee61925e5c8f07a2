use vnkeybert_core::errors::KeyBertResult;
use vnkeybert_core::models::Keyword;

use super::check_inputs;
use crate::similarity::similarity_to;

/// Maximal Marginal Relevance selection.
///
/// Seeds with the most document-similar candidate, then repeatedly adds the
/// candidate maximising
/// `(1 - diversity) * doc_sim[i] - diversity * max_{j in selected} sim(i, j)`.
/// Ties go to the lowest candidate index. Output is in selection order;
/// `top_n` is clamped to the number of candidates.
///
/// With `diversity = 0` this is exactly the cosine top-N ranking.
pub fn maximal_marginal_relevance<V: AsRef<[f32]>>(
    document: &[f32],
    candidates: &[V],
    phrases: &[&str],
    top_n: usize,
    diversity: f64,
) -> KeyBertResult<Vec<Keyword>> {
    check_inputs(document, candidates, phrases)?;
    let n = candidates.len();
    let target = top_n.min(n);
    if target == 0 {
        return Ok(Vec::new());
    }

    let doc_sim = similarity_to(document, candidates);
    let seed = argmax(&doc_sim);

    let mut selected = vec![seed];
    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != seed).collect();
    // closest[i]: max similarity of candidate i to anything selected so far.
    let mut closest = similarity_to(candidates[seed].as_ref(), candidates);

    while selected.len() < target {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &i) in remaining.iter().enumerate() {
            let score = (1.0 - diversity) * doc_sim[i] - diversity * closest[i];
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((pos, score));
            }
        }
        let Some((pos, _)) = best else { break };

        let chosen = remaining.remove(pos);
        selected.push(chosen);
        let to_chosen = similarity_to(candidates[chosen].as_ref(), candidates);
        for &i in &remaining {
            closest[i] = closest[i].max(to_chosen[i]);
        }
    }

    Ok(selected
        .into_iter()
        .map(|i| Keyword::new(phrases[i], doc_sim[i]))
        .collect())
}

/// Index of the first maximum.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
