use crate::errors::KeyBertResult;

/// Word segmentation of raw text.
///
/// Each output string holds the words of the matching input separated by
/// single spaces; multi-syllable words are joined with `_`. Must be
/// deterministic.
pub trait ISegmenter: Send + Sync {
    fn segment(&self, documents: &[String]) -> KeyBertResult<Vec<String>>;
}
