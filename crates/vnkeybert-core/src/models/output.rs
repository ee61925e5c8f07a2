use serde::Serialize;

use super::Keyword;

/// Result of one extraction call.
///
/// A single submitted document yields its keyword list directly; any other
/// number of documents yields one list per document, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionOutput {
    Single(Vec<Keyword>),
    Batch(Vec<Vec<Keyword>>),
}

impl ExtractionOutput {
    /// Flatten a one-document result, keep anything else as a batch.
    pub fn from_per_document(mut results: Vec<Vec<Keyword>>) -> Self {
        if results.len() == 1 {
            Self::Single(results.remove(0))
        } else {
            Self::Batch(results)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(keywords) => keywords.is_empty(),
            Self::Batch(lists) => lists.is_empty(),
        }
    }

    pub fn as_single(&self) -> Option<&[Keyword]> {
        match self {
            Self::Single(keywords) => Some(keywords),
            Self::Batch(_) => None,
        }
    }

    pub fn as_batch(&self) -> Option<&[Vec<Keyword>]> {
        match self {
            Self::Single(_) => None,
            Self::Batch(lists) => Some(lists),
        }
    }

    /// Always return per-document lists, undoing the single-document flattening.
    pub fn into_per_document(self) -> Vec<Vec<Keyword>> {
        match self {
            Self::Single(keywords) => vec![keywords],
            Self::Batch(lists) => lists,
        }
    }
}
