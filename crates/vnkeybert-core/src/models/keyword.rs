use serde::{Deserialize, Serialize};

/// A ranked keyphrase with its similarity to the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub phrase: String,
    /// Cosine similarity to the document, rounded to 4 decimals.
    pub score: f64,
}

impl Keyword {
    /// Build a keyword, rounding the raw similarity to 4 decimals.
    pub fn new(phrase: impl Into<String>, similarity: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score: round_score(similarity),
        }
    }
}

/// Round a score to 4 decimal places.
///
/// Rounds the exact binary value, so `0.00035` (stored just below the
/// midpoint) becomes `0.0003`. Scaling by 10^4 first would round it up.
pub fn round_score(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.4}").parse().unwrap_or(value)
}
