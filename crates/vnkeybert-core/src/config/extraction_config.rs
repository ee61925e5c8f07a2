use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::{NgramRange, SelectionStrategy};

/// Per-call keyword extraction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Length, in words, of the extracted keyphrases.
    pub ngram_range: NgramRange,
    /// Number of keyphrases returned per document.
    pub top_n: usize,
    /// Minimum number of documents a candidate must appear in.
    pub min_df: usize,
    /// Ranking strategy.
    pub selection: SelectionStrategy,
    /// Upper bound accepted for `nr_candidates`.
    pub max_nr_candidates: usize,
    /// Upper bound on C(nr_candidates, top_n) for Max Sum Distance.
    pub max_combinations: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            ngram_range: NgramRange::default(),
            top_n: defaults::DEFAULT_TOP_N,
            min_df: defaults::DEFAULT_MIN_DF,
            selection: SelectionStrategy::default(),
            max_nr_candidates: defaults::DEFAULT_MAX_NR_CANDIDATES,
            max_combinations: defaults::DEFAULT_MAX_COMBINATIONS,
        }
    }
}

impl ExtractionConfig {
    pub fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_ngram_range(mut self, min: usize, max: usize) -> Self {
        self.ngram_range = NgramRange { min, max };
        self
    }

    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Reject out-of-range parameters before any work is done.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::invalid("top_n", "must be at least 1"));
        }
        self.ngram_range.validate()?;
        if self.min_df == 0 {
            return Err(ConfigError::invalid("min_df", "must be at least 1"));
        }

        match self.selection {
            SelectionStrategy::Cosine => {}
            SelectionStrategy::Mmr { diversity } => {
                if !diversity.is_finite() || !(0.0..=1.0).contains(&diversity) {
                    return Err(ConfigError::invalid(
                        "diversity",
                        format!("must be within [0, 1], got {diversity}"),
                    ));
                }
            }
            SelectionStrategy::MaxSum { nr_candidates } => {
                if nr_candidates < self.top_n {
                    return Err(ConfigError::invalid(
                        "nr_candidates",
                        format!("must be >= top_n ({}), got {nr_candidates}", self.top_n),
                    ));
                }
                if nr_candidates > self.max_nr_candidates {
                    return Err(ConfigError::invalid(
                        "nr_candidates",
                        format!(
                            "must be <= {}, got {nr_candidates}",
                            self.max_nr_candidates
                        ),
                    ));
                }
                let combinations = binomial(nr_candidates, self.top_n);
                if combinations > u128::from(self.max_combinations) {
                    return Err(ConfigError::invalid(
                        "nr_candidates",
                        format!(
                            "C({nr_candidates}, {}) = {combinations} combinations exceeds the limit of {}",
                            self.top_n, self.max_combinations
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Binomial coefficient, saturating at `u128::MAX`.
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        acc = match acc.checked_mul((n - i) as u128) {
            Some(v) => v / (i as u128 + 1),
            None => return u128::MAX,
        };
    }
    acc
}
