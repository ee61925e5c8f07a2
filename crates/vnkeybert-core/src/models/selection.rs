use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// How candidates are ranked once their similarities are known.
///
/// Max Sum Distance searches all C(nr_candidates, top_n) subsets of the pool,
/// so both values are bounded by `ExtractionConfig::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Top-N by cosine similarity to the document.
    #[default]
    Cosine,
    /// Least mutually similar `top_n` subset of the `nr_candidates` most relevant phrases.
    MaxSum {
        #[serde(default = "default_nr_candidates")]
        nr_candidates: usize,
    },
    /// Maximal Marginal Relevance with `diversity` in [0, 1].
    Mmr {
        #[serde(default = "default_diversity")]
        diversity: f64,
    },
}

impl SelectionStrategy {
    pub fn max_sum() -> Self {
        Self::MaxSum {
            nr_candidates: defaults::DEFAULT_NR_CANDIDATES,
        }
    }

    pub fn mmr() -> Self {
        Self::Mmr {
            diversity: defaults::DEFAULT_DIVERSITY,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::MaxSum { .. } => "max_sum",
            Self::Mmr { .. } => "mmr",
        }
    }
}

fn default_nr_candidates() -> usize {
    defaults::DEFAULT_NR_CANDIDATES
}

fn default_diversity() -> f64 {
    defaults::DEFAULT_DIVERSITY
}
