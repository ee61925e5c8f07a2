use vnkeybert_core::errors::KeyBertResult;
use vnkeybert_core::traits::ISegmenter;

use super::units;

/// Treats every whitespace-separated syllable as its own word and detaches
/// punctuation, e.g. `"đẹp, quá."` → `"đẹp , quá ."`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl ISegmenter for WhitespaceSegmenter {
    fn segment(&self, documents: &[String]) -> KeyBertResult<Vec<String>> {
        Ok(documents.iter().map(|doc| units(doc).join(" ")).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_punctuation_and_collapses_spaces() {
        let out = WhitespaceSegmenter
            .segment(&["đầm  thiết kế, đẹp.".to_string()])
            .unwrap();
        assert_eq!(out, vec!["đầm thiết kế , đẹp ."]);
    }

    #[test]
    fn keeps_presegmented_words() {
        let out = WhitespaceSegmenter.segment(&["người_mẫu xinh".to_string()]).unwrap();
        assert_eq!(out, vec!["người_mẫu xinh"]);
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(WhitespaceSegmenter.segment(&[String::new()]).unwrap(), vec![""]);
    }
}
