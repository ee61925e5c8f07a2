//! Property tests for similarity and the three selection strategies.

use std::collections::HashSet;

use proptest::prelude::*;
use vnkeybert_extraction::selection::{
    advance_combination, max_sum_distance, maximal_marginal_relevance, top_n_by_similarity,
};
use vnkeybert_extraction::similarity::{cosine_similarity, ranked_indices, similarity_to};

const DIMS: usize = 6;

fn vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, DIMS)
}

fn candidates() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(vector(), 1..12)
}

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{i}")).collect()
}

fn refs(names: &[String]) -> Vec<&str> {
    names.iter().map(String::as_str).collect()
}

fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

fn index_of(phrase: &str) -> usize {
    phrase[1..].parse().unwrap()
}

/// Summed pairwise similarity of the candidates at `members`.
fn spread(cands: &[Vec<f32>], members: &[usize]) -> f64 {
    let mut sum = 0.0;
    for (a, &i) in members.iter().enumerate() {
        for &j in &members[a + 1..] {
            sum += cosine_similarity(&cands[i], &cands[j]);
        }
    }
    sum
}

/// Lowest spread over every `k`-subset of `pool`, by exhaustive search.
fn brute_force_min_spread(cands: &[Vec<f32>], pool: &[usize], k: usize) -> f64 {
    let mut combo: Vec<usize> = (0..k).collect();
    let mut best = f64::INFINITY;
    loop {
        let members: Vec<usize> = combo.iter().map(|&p| pool[p]).collect();
        best = best.min(spread(cands, &members));
        if !advance_combination(&mut combo, pool.len()) {
            return best;
        }
    }
}

/// MMR over a fully materialised candidate similarity matrix.
fn reference_mmr(doc: &[f32], cands: &[Vec<f32>], top_n: usize, diversity: f64) -> Vec<usize> {
    let doc_sim = similarity_to(doc, cands);
    let sim: Vec<Vec<f64>> = cands.iter().map(|c| similarity_to(c, cands)).collect();
    let mut seed = 0;
    for i in 1..cands.len() {
        if doc_sim[i] > doc_sim[seed] {
            seed = i;
        }
    }
    let mut selected = vec![seed];
    while selected.len() < top_n.min(cands.len()) {
        let mut best: Option<(usize, f64)> = None;
        for i in (0..cands.len()).filter(|i| !selected.contains(i)) {
            let closest = selected.iter().map(|&j| sim[i][j]).fold(f64::MIN, f64::max);
            let score = (1.0 - diversity) * doc_sim[i] - diversity * closest;
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((i, score));
            }
        }
        match best {
            Some((i, _)) => selected.push(i),
            None => break,
        }
    }
    selected
}

proptest! {
    #[test]
    fn cosine_is_bounded(a in vector(), b in vector()) {
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&s));
    }

    #[test]
    fn cosine_of_self_is_one(v in vector()) {
        prop_assume!(norm(&v) > 1e-3);
        prop_assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_with_zero_is_zero(v in vector()) {
        prop_assert_eq!(cosine_similarity(&v, &[0.0; DIMS]), 0.0);
    }

    #[test]
    fn plain_cardinality_is_min_of_top_n_and_pool(
        doc in vector(), cands in candidates(), top_n in 1usize..15
    ) {
        let names = names(cands.len());
        let out = top_n_by_similarity(&doc, &cands, &refs(&names), top_n).unwrap();
        prop_assert_eq!(out.len(), top_n.min(cands.len()));
        for pair in out.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn mmr_without_diversity_matches_plain(
        doc in vector(), cands in candidates(), top_n in 1usize..15
    ) {
        let names = names(cands.len());
        let plain = top_n_by_similarity(&doc, &cands, &refs(&names), top_n).unwrap();
        let mmr = maximal_marginal_relevance(&doc, &cands, &refs(&names), top_n, 0.0).unwrap();
        let plain_set: HashSet<String> = plain.into_iter().map(|k| k.phrase).collect();
        let mmr_set: HashSet<String> = mmr.into_iter().map(|k| k.phrase).collect();
        prop_assert_eq!(plain_set, mmr_set);
    }

    #[test]
    fn mmr_is_deterministic_and_distinct(
        doc in vector(), cands in candidates(), top_n in 1usize..15, diversity in 0.0f64..=1.0
    ) {
        let names = names(cands.len());
        let first = maximal_marginal_relevance(&doc, &cands, &refs(&names), top_n, diversity).unwrap();
        let second = maximal_marginal_relevance(&doc, &cands, &refs(&names), top_n, diversity).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), top_n.min(cands.len()));
        let unique: HashSet<&str> = first.iter().map(|k| k.phrase.as_str()).collect();
        prop_assert_eq!(unique.len(), first.len());
    }

    #[test]
    fn mmr_seed_is_most_relevant(
        doc in vector(), cands in candidates(), diversity in 0.0f64..=1.0
    ) {
        let names = names(cands.len());
        let out = maximal_marginal_relevance(&doc, &cands, &refs(&names), 1, diversity).unwrap();
        let best = ranked_indices(&similarity_to(&doc, &cands))[0];
        prop_assert_eq!(&out[0].phrase, &names[best]);
    }

    #[test]
    fn max_sum_stays_within_relevance_pool(
        doc in vector(), cands in candidates(), top_n in 1usize..5, extra in 0usize..5
    ) {
        let nr_candidates = top_n + extra;
        let names = names(cands.len());
        let out = max_sum_distance(&doc, &cands, &refs(&names), top_n, nr_candidates).unwrap();

        let pool: HashSet<&str> = ranked_indices(&similarity_to(&doc, &cands))
            .into_iter()
            .take(nr_candidates)
            .map(|i| names[i].as_str())
            .collect();
        prop_assert_eq!(out.len(), top_n.min(pool.len()));
        for k in &out {
            prop_assert!(pool.contains(k.phrase.as_str()), "{} outside pool", k.phrase);
        }
    }

    #[test]
    fn max_sum_output_is_ordered_by_score(
        doc in vector(), cands in candidates(), top_n in 1usize..5
    ) {
        let names = names(cands.len());
        let out = max_sum_distance(&doc, &cands, &refs(&names), top_n, top_n + 3).unwrap();
        for pair in out.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn max_sum_finds_the_least_similar_subset(
        doc in vector(),
        cands in prop::collection::vec(vector(), 1..10),
        top_n in 1usize..4,
        extra in 0usize..5,
    ) {
        let nr_candidates = top_n + extra;
        let names = names(cands.len());
        let out = max_sum_distance(&doc, &cands, &refs(&names), top_n, nr_candidates).unwrap();

        let pool: Vec<usize> = ranked_indices(&similarity_to(&doc, &cands))
            .into_iter()
            .take(nr_candidates)
            .collect();
        let chosen: Vec<usize> = out.iter().map(|k| index_of(&k.phrase)).collect();
        let optimum = brute_force_min_spread(&cands, &pool, top_n.min(pool.len()));
        prop_assert!(spread(&cands, &chosen) <= optimum + 1e-9);
    }

    #[test]
    fn mmr_matches_full_matrix_reference(
        doc in vector(), cands in candidates(), top_n in 1usize..15, diversity in 0.0f64..=1.0
    ) {
        let names = names(cands.len());
        let out = maximal_marginal_relevance(&doc, &cands, &refs(&names), top_n, diversity).unwrap();
        let picked: Vec<usize> = out.iter().map(|k| index_of(&k.phrase)).collect();
        prop_assert_eq!(picked, reference_mmr(&doc, &cands, top_n, diversity));
    }
}
