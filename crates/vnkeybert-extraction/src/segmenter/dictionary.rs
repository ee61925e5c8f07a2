use std::collections::HashSet;
use std::path::Path;

use tracing::debug;
use vnkeybert_core::errors::{ConfigError, KeyBertResult};
use vnkeybert_core::traits::ISegmenter;

use super::{is_word, units};

/// Greedy longest-match segmenter for multi-syllable words.
///
/// Consecutive syllables forming a dictionary word are joined with `_`
/// (`người mẫu` → `người_mẫu`); matching ignores case, output keeps it.
#[derive(Debug, Clone, Default)]
pub struct DictionarySegmenter {
    words: HashSet<String>,
    max_syllables: usize,
}

impl DictionarySegmenter {
    /// Build from word entries, syllables separated by spaces or `_`.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut max_syllables = 1;
        for word in words {
            let syllables: Vec<String> = word
                .as_ref()
                .split(|c: char| c.is_whitespace() || c == '_')
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect();
            if syllables.len() < 2 {
                continue;
            }
            max_syllables = max_syllables.max(syllables.len());
            set.insert(syllables.join(" "));
        }
        Self {
            words: set,
            max_syllables,
        }
    }

    /// Load a word list with one entry per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> KeyBertResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let segmenter = Self::new(
            source
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        );
        debug!(path = %path.display(), words = segmenter.len(), "loaded segmentation dictionary");
        Ok(segmenter)
    }

    /// Number of multi-syllable words known.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn segment_one(&self, text: &str) -> String {
        let units = units(text);
        let mut out: Vec<String> = Vec::with_capacity(units.len());
        let mut i = 0;
        while i < units.len() {
            let longest = self.max_syllables.min(units.len() - i);
            let matched = (2..=longest).rev().find(|&len| {
                let span = &units[i..i + len];
                span.iter().all(|u| is_word(u))
                    && self.words.contains(&span.join(" ").to_lowercase())
            });
            match matched {
                Some(len) => {
                    out.push(units[i..i + len].join("_"));
                    i += len;
                }
                None => {
                    out.push(units[i].to_string());
                    i += 1;
                }
            }
        }
        out.join(" ")
    }
}

impl ISegmenter for DictionarySegmenter {
    fn segment(&self, documents: &[String]) -> KeyBertResult<Vec<String>> {
        Ok(documents.iter().map(|doc| self.segment_one(doc)).collect())
    }
}
