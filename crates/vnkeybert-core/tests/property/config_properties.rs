use proptest::prelude::*;
use vnkeybert_core::config::{binomial, ExtractionConfig};
use vnkeybert_core::models::SelectionStrategy;

proptest! {
    #[test]
    fn diversity_validation_matches_unit_interval(diversity in -2.0f64..2.0) {
        let config = ExtractionConfig::default()
            .with_selection(SelectionStrategy::Mmr { diversity });
        prop_assert_eq!(config.validate().is_ok(), (0.0..=1.0).contains(&diversity));
    }

    #[test]
    fn binomial_satisfies_pascal_rule(n in 1usize..60, k in 1usize..60) {
        prop_assume!(k <= n);
        prop_assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
    }

    #[test]
    fn accepted_max_sum_configs_stay_under_limit(top_n in 1usize..12, nr in 1usize..120) {
        let config = ExtractionConfig::default()
            .with_top_n(top_n)
            .with_selection(SelectionStrategy::MaxSum { nr_candidates: nr });
        if config.validate().is_ok() {
            prop_assert!(nr >= top_n);
            prop_assert!(nr <= config.max_nr_candidates);
            prop_assert!(binomial(nr, top_n) <= u128::from(config.max_combinations));
        }
    }
}
