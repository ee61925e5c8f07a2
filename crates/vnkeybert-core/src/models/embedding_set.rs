/// Document and candidate-phrase embeddings for one batch of documents.
///
/// `phrase_embeddings[i]` is the embedding of `vocabulary[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddingSet {
    pub document_embeddings: Vec<Vec<f32>>,
    pub vocabulary: Vec<String>,
    pub phrase_embeddings: Vec<Vec<f32>>,
}

impl EmbeddingSet {
    pub fn is_empty(&self) -> bool {
        self.document_embeddings.is_empty() && self.vocabulary.is_empty()
    }
}
