//! KeywordExtractor: segment → vectorize → embed → select, per call.

use tracing::{debug, info, warn};
use vnkeybert_core::cancellation::Cancellation;
use vnkeybert_core::config::{defaults, ExtractionConfig, KeyBertConfig};
use vnkeybert_core::errors::{ExtractionError, KeyBertResult};
use vnkeybert_core::models::{EmbeddingSet, ExtractionOutput, Keyword, NgramRange, VectorizedCorpus};
use vnkeybert_core::traits::{IEmbeddingProvider, ISegmenter, IVectorizer};
use vnkeybert_embeddings::validation::validate_count;
use vnkeybert_embeddings::EmbeddingEngine;

use unicode_normalization::UnicodeNormalization;

use crate::segmenter::WhitespaceSegmenter;
use crate::selection;
use crate::vectorizer::CountVectorizer;

/// Extracts the phrases of a document that are closest to the document
/// itself in embedding space.
///
/// Owns its collaborators; nothing is shared between calls except the
/// embedder's cache. All documents of a call share one vocabulary, so the
/// embedder is invoked exactly twice: once for the documents, once for the
/// vocabulary.
pub struct KeywordExtractor {
    segmenter: Box<dyn ISegmenter>,
    vectorizer: Box<dyn IVectorizer>,
    embedder: Box<dyn IEmbeddingProvider>,
    max_length: usize,
}

impl KeywordExtractor {
    /// Extractor with the default segmenter and vectorizer.
    pub fn new(embedder: Box<dyn IEmbeddingProvider>) -> Self {
        Self::with_components(
            Box::new(WhitespaceSegmenter),
            Box::new(CountVectorizer),
            embedder,
        )
    }

    pub fn with_components(
        segmenter: Box<dyn ISegmenter>,
        vectorizer: Box<dyn IVectorizer>,
        embedder: Box<dyn IEmbeddingProvider>,
    ) -> Self {
        Self {
            segmenter,
            vectorizer,
            embedder,
            max_length: defaults::DEFAULT_MAX_LENGTH,
        }
    }

    /// Build the embedding engine described by `config.embedding`.
    ///
    /// # Errors
    /// Any `ConfigError` from validating `config`.
    pub fn from_config(config: &KeyBertConfig) -> KeyBertResult<Self> {
        config.validate()?;
        let engine = EmbeddingEngine::new(&config.embedding)?;
        Ok(Self::new(Box::new(engine)).with_max_length(config.embedding.max_length))
    }

    pub fn with_segmenter(mut self, segmenter: Box<dyn ISegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Token limit passed to the embedder.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn embedder(&self) -> &dyn IEmbeddingProvider {
        self.embedder.as_ref()
    }

    /// Extract keyphrases from one or more documents.
    ///
    /// One document gives `ExtractionOutput::Single`; otherwise one list per
    /// document in `ExtractionOutput::Batch`. A document without candidates
    /// gets an empty list.
    ///
    /// # Errors
    /// `ConfigError` for invalid options; collaborator failures.
    pub fn extract_keywords<S: AsRef<str>>(
        &self,
        documents: &[S],
        config: &ExtractionConfig,
    ) -> KeyBertResult<ExtractionOutput> {
        self.extract_keywords_with_cancellation(documents, config, &Cancellation::none())
    }

    /// `extract_keywords`, checking `cancel` around both embedding calls.
    pub fn extract_keywords_with_cancellation<S: AsRef<str>>(
        &self,
        documents: &[S],
        config: &ExtractionConfig,
        cancel: &Cancellation,
    ) -> KeyBertResult<ExtractionOutput> {
        config.validate()?;
        if documents.is_empty() {
            return Ok(ExtractionOutput::Batch(Vec::new()));
        }

        let raw = normalize(documents);
        let empty = || ExtractionOutput::from_per_document(vec![Vec::new(); raw.len()]);
        if all_blank(&raw) {
            debug!(documents = raw.len(), "all documents empty");
            return Ok(empty());
        }

        let segmented = self.segment(&raw)?;
        let corpus = self
            .vectorizer
            .fit_transform(&segmented, config.ngram_range, config.min_df)?;
        if corpus.is_empty() {
            debug!(documents = raw.len(), "no candidates survive vectorization");
            return Ok(empty());
        }

        let (doc_embeddings, phrase_embeddings) =
            self.embed_corpus(&segmented, &corpus.vocabulary, cancel)?;

        info!(
            documents = raw.len(),
            vocabulary = corpus.vocabulary.len(),
            strategy = config.selection.name(),
            top_n = config.top_n,
            "extracting keywords"
        );

        let results = doc_embeddings
            .iter()
            .enumerate()
            .map(|(d, doc_embedding)| {
                self.keywords_for_document(d, doc_embedding, &corpus, &phrase_embeddings, config)
            })
            .collect();

        Ok(ExtractionOutput::from_per_document(results))
    }

    /// Document and vocabulary embeddings for a batch, with `min_df = 1`.
    ///
    /// Returns an empty set for empty input or when no candidate of the
    /// requested length exists.
    pub fn extract_embeddings<S: AsRef<str>>(
        &self,
        documents: &[S],
        ngram_range: NgramRange,
        is_segmented: bool,
    ) -> KeyBertResult<EmbeddingSet> {
        ngram_range.validate()?;
        let raw = normalize(documents);
        if all_blank(&raw) {
            return Ok(EmbeddingSet::default());
        }

        let segmented = if is_segmented { raw } else { self.segment(&raw)? };
        let corpus = self.vectorizer.fit_transform(&segmented, ngram_range, 1)?;
        if corpus.is_empty() {
            return Ok(EmbeddingSet::default());
        }

        let (document_embeddings, phrase_embeddings) =
            self.embed_corpus(&segmented, &corpus.vocabulary, &Cancellation::none())?;
        Ok(EmbeddingSet {
            document_embeddings,
            vocabulary: corpus.vocabulary,
            phrase_embeddings,
        })
    }

    fn segment(&self, raw: &[String]) -> KeyBertResult<Vec<String>> {
        let segmented = self.segmenter.segment(raw)?;
        if segmented.len() != raw.len() {
            return Err(ExtractionError::SegmentationFailed {
                reason: format!(
                    "segmenter returned {} documents for {} inputs",
                    segmented.len(),
                    raw.len()
                ),
            }
            .into());
        }
        Ok(segmented)
    }

    fn embed_corpus(
        &self,
        documents: &[String],
        vocabulary: &[String],
        cancel: &Cancellation,
    ) -> KeyBertResult<(Vec<Vec<f32>>, Vec<Vec<f32>>)> {
        cancel.check("embed documents")?;
        let doc_embeddings = self.embedder.embed_batch(documents, self.max_length)?;
        validate_count(documents.len(), doc_embeddings.len())?;

        cancel.check("embed phrases")?;
        let phrase_embeddings = self.embedder.embed_batch(vocabulary, self.max_length)?;
        validate_count(vocabulary.len(), phrase_embeddings.len())?;

        cancel.check("select keywords")?;
        Ok((doc_embeddings, phrase_embeddings))
    }

    /// Select keywords among the candidates present in document `index`.
    /// Failures are logged and isolated to this document.
    fn keywords_for_document(
        &self,
        index: usize,
        doc_embedding: &[f32],
        corpus: &VectorizedCorpus,
        phrase_embeddings: &[Vec<f32>],
        config: &ExtractionConfig,
    ) -> Vec<Keyword> {
        let columns: Vec<usize> = corpus
            .matrix
            .nonzero_columns(index)
            .filter(|&c| c < corpus.vocabulary.len())
            .collect();
        if columns.is_empty() {
            debug!(document = index, "document has no candidates");
            return Vec::new();
        }

        let phrases: Vec<&str> = columns
            .iter()
            .map(|&c| corpus.vocabulary[c].as_str())
            .collect();
        let candidates: Vec<&[f32]> = columns
            .iter()
            .map(|&c| phrase_embeddings[c].as_slice())
            .collect();

        match selection::select(
            &config.selection,
            doc_embedding,
            &candidates,
            &phrases,
            config.top_n,
        ) {
            Ok(keywords) => {
                debug!(
                    document = index,
                    candidates = columns.len(),
                    selected = keywords.len(),
                    "document keywords selected"
                );
                keywords
            }
            Err(e) => {
                warn!(document = index, error = %e, "keyword selection failed, returning none");
                Vec::new()
            }
        }
    }
}

/// NFC-compose each document so decomposed Vietnamese diacritics
/// tokenize the same as precomposed ones.
fn normalize<S: AsRef<str>>(documents: &[S]) -> Vec<String> {
    documents.iter().map(|d| d.as_ref().nfc().collect()).collect()
}

fn all_blank(documents: &[String]) -> bool {
    documents.iter().all(|d| d.trim().is_empty())
}
