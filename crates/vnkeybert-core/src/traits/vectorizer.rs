use crate::errors::KeyBertResult;
use crate::models::{NgramRange, VectorizedCorpus};

/// Candidate extraction over a whole batch of segmented documents.
///
/// Column `i` of the returned matrix must correspond to `vocabulary[i]`.
pub trait IVectorizer: Send + Sync {
    fn fit_transform(
        &self,
        documents: &[String],
        ngram_range: NgramRange,
        min_df: usize,
    ) -> KeyBertResult<VectorizedCorpus>;
}
