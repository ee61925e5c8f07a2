//! Cosine similarity between embeddings.

/// Cosine of the angle between two embeddings, accumulated in f64.
///
/// Always lands in `[-1, 1]`. Pairs that have no defined angle score 0.0:
/// vectors of different dimensionality, empty or zero-magnitude vectors,
/// and vectors with NaN or infinite components.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );
    let denom = (norm_a * norm_b).sqrt();
    if !(denom >= f64::EPSILON) {
        return 0.0;
    }
    let cos = dot / denom;
    if cos.is_finite() {
        cos.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Similarity of `query` to every row of `matrix`.
pub fn similarity_to<V: AsRef<[f32]>>(query: &[f32], matrix: &[V]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| cosine_similarity(query, row.as_ref()))
        .collect()
}

/// Symmetric matrix of similarities between every pair of rows.
pub fn pairwise_similarity<V: AsRef<[f32]>>(matrix: &[V]) -> Vec<Vec<f64>> {
    let n = matrix.len();
    let mut sim = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        sim[i][i] = cosine_similarity(matrix[i].as_ref(), matrix[i].as_ref());
        for j in (i + 1)..n {
            let s = cosine_similarity(matrix[i].as_ref(), matrix[j].as_ref());
            sim[i][j] = s;
            sim[j][i] = s;
        }
    }
    sim
}

/// Row indices ordered by descending score; ties keep the lower index first.
pub fn ranked_indices(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}
