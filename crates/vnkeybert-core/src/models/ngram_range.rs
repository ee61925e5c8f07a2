use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::ConfigError;

/// Inclusive range of phrase lengths, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NgramRange {
    pub min: usize,
    pub max: usize,
}

impl Default for NgramRange {
    fn default() -> Self {
        Self {
            min: defaults::DEFAULT_NGRAM_MIN,
            max: defaults::DEFAULT_NGRAM_MAX,
        }
    }
}

impl NgramRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::InvalidParameter {
                name: "ngram_range".to_string(),
                reason: format!(
                    "expected 1 <= min <= max, got ({}, {})",
                    self.min, self.max
                ),
            });
        }
        Ok(())
    }
}
