//! N-gram candidate extraction with document-frequency filtering.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use vnkeybert_core::errors::KeyBertResult;
use vnkeybert_core::models::{DocumentTermMatrix, NgramRange, VectorizedCorpus};
use vnkeybert_core::traits::IVectorizer;

/// Words of two or more word characters; `_` counts, so `người_mẫu` stays whole.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Count vectorizer over lowercased word n-grams.
///
/// The vocabulary is shared by all documents of one call, sorted, and
/// keeps only n-grams found in at least `min_df` documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountVectorizer;

impl CountVectorizer {
    pub fn new() -> Self {
        Self
    }

    /// The n-grams of one document, in order of appearance, repeats included.
    pub fn analyze(document: &str, ngram_range: NgramRange) -> Vec<String> {
        let lowered = document.to_lowercase();
        let tokens: Vec<&str> = TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

        let mut grams = Vec::new();
        for n in ngram_range.min..=ngram_range.max.min(tokens.len()) {
            grams.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        grams
    }
}

impl IVectorizer for CountVectorizer {
    fn fit_transform(
        &self,
        documents: &[String],
        ngram_range: NgramRange,
        min_df: usize,
    ) -> KeyBertResult<VectorizedCorpus> {
        ngram_range.validate()?;

        let counts: Vec<HashMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let mut tf: HashMap<String, u32> = HashMap::new();
                for gram in Self::analyze(doc, ngram_range) {
                    *tf.entry(gram).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let vocabulary: Vec<String> = df
            .into_iter()
            .filter(|&(_, freq)| freq >= min_df)
            .map(|(term, _)| term.to_string())
            .collect();
        let column: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                tf.iter()
                    .filter_map(|(term, &count)| Some((*column.get(term.as_str())?, count)))
                    .collect()
            })
            .collect();

        let matrix = DocumentTermMatrix::new(rows, vocabulary.len());
        Ok(VectorizedCorpus { vocabulary, matrix })
    }
}
