//! Word segmenters producing space-separated word strings.

mod dictionary;
mod whitespace;

use std::sync::LazyLock;

use regex::Regex;

pub use dictionary::DictionarySegmenter;
pub use whitespace::WhitespaceSegmenter;

/// A run of word characters, or a run of punctuation.
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+|[^\w\s]+").unwrap());

/// Split raw text into words and punctuation marks.
fn units(text: &str) -> Vec<&str> {
    UNIT_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether a unit from `units` is a word rather than punctuation.
fn is_word(unit: &str) -> bool {
    unit.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}
