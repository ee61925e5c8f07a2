mod embedding;
mod segmenter;
mod vectorizer;

pub use embedding::IEmbeddingProvider;
pub use segmenter::ISegmenter;
pub use vectorizer::IVectorizer;
