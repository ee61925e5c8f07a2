use vnkeybert_core::config::*;
use vnkeybert_core::errors::ConfigError;
use vnkeybert_core::models::{NgramRange, SelectionStrategy};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = KeyBertConfig::from_toml("").unwrap();

    // Embedding defaults
    assert_eq!(config.embedding.provider, "hashing");
    assert_eq!(config.embedding.model, "vinai/phobert-base");
    assert_eq!(config.embedding.max_length, 150);
    assert_eq!(config.embedding.batch_size, 50);
    assert_eq!(config.embedding.l1_cache_size, 10_000);
    assert_eq!(config.embedding.dimensions().unwrap(), 768);

    // Extraction defaults
    assert_eq!(config.extraction.ngram_range, NgramRange::new(1, 1));
    assert_eq!(config.extraction.top_n, 5);
    assert_eq!(config.extraction.min_df, 1);
    assert_eq!(config.extraction.selection, SelectionStrategy::Cosine);
    assert_eq!(config.extraction.max_nr_candidates, 100);
    assert_eq!(config.extraction.max_combinations, 1_000_000);

    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[embedding]
model = "vinai/phobert-large"
max_length = 64

[extraction]
top_n = 3
ngram_range = { min = 1, max = 4 }

[extraction.selection]
mode = "max_sum"
nr_candidates = 10
"#;
    let config = KeyBertConfig::from_toml(toml).unwrap();
    assert_eq!(config.embedding.dimensions().unwrap(), 1024);
    assert_eq!(config.embedding.max_length, 64);
    // Non-overridden fields keep defaults
    assert_eq!(config.embedding.batch_size, 50);
    assert_eq!(config.extraction.top_n, 3);
    assert_eq!(config.extraction.ngram_range, NgramRange::new(1, 4));
    assert_eq!(
        config.extraction.selection,
        SelectionStrategy::MaxSum { nr_candidates: 10 }
    );
    assert!(config.validate().is_ok());
}

#[test]
fn mmr_mode_takes_default_diversity() {
    let toml = r#"
[extraction.selection]
mode = "mmr"
"#;
    let config = KeyBertConfig::from_toml(toml).unwrap();
    assert_eq!(
        config.extraction.selection,
        SelectionStrategy::Mmr { diversity: 0.5 }
    );
}

#[test]
fn unknown_mode_fails_to_parse() {
    let toml = r#"
[extraction.selection]
mode = "random"
"#;
    assert!(matches!(
        KeyBertConfig::from_toml(toml),
        Err(ConfigError::ParseFailed { .. })
    ));
}

#[test]
fn unsupported_model_is_rejected() {
    let config = EmbeddingConfig {
        model: "bert-base-uncased".to_string(),
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedModel { ref name } if name == "bert-base-uncased"));
}

#[test]
fn max_length_bounds_are_enforced() {
    for bad in [0, 255, 1000] {
        let config = EmbeddingConfig {
            max_length: bad,
            ..Default::default()
        };
        assert!(config.validate().is_err(), "max_length {bad} should be rejected");
    }
    let config = EmbeddingConfig {
        max_length: 254,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn zero_top_n_is_rejected() {
    let err = ExtractionConfig::default().with_top_n(0).validate().unwrap_err();
    assert!(err.to_string().contains("top_n"));
}

#[test]
fn inverted_ngram_range_is_rejected() {
    assert!(ExtractionConfig::default()
        .with_ngram_range(3, 1)
        .validate()
        .is_err());
    assert!(ExtractionConfig::default()
        .with_ngram_range(0, 2)
        .validate()
        .is_err());
}

#[test]
fn zero_min_df_is_rejected() {
    assert!(ExtractionConfig::default().with_min_df(0).validate().is_err());
}

#[test]
fn diversity_outside_unit_interval_is_rejected() {
    for bad in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
        let config =
            ExtractionConfig::default().with_selection(SelectionStrategy::Mmr { diversity: bad });
        assert!(config.validate().is_err(), "diversity {bad} should be rejected");
    }
    for ok in [0.0, 0.5, 1.0] {
        let config =
            ExtractionConfig::default().with_selection(SelectionStrategy::Mmr { diversity: ok });
        assert!(config.validate().is_ok());
    }
}

#[test]
fn nr_candidates_below_top_n_is_rejected() {
    let config = ExtractionConfig::default()
        .with_top_n(5)
        .with_selection(SelectionStrategy::MaxSum { nr_candidates: 4 });
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("nr_candidates"));
}

#[test]
fn combinatorial_blowup_is_rejected() {
    // C(100, 10) is far beyond the default limit.
    let config = ExtractionConfig::default()
        .with_top_n(10)
        .with_selection(SelectionStrategy::MaxSum { nr_candidates: 100 });
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("combinations"));
}

#[test]
fn nr_candidates_above_limit_is_rejected() {
    let config = ExtractionConfig::default()
        .with_top_n(1)
        .with_selection(SelectionStrategy::MaxSum { nr_candidates: 101 });
    assert!(config.validate().is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = KeyBertConfig::default();
    config.extraction = config
        .extraction
        .with_selection(SelectionStrategy::Mmr { diversity: 0.7 });
    let text = toml::to_string(&config).unwrap();
    let parsed = KeyBertConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn missing_file_reports_path() {
    let err = KeyBertConfig::from_file("/nonexistent/vnkeybert.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/vnkeybert.toml"));
}
