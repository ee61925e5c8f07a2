//! # vnkeybert-extraction
//!
//! Keyphrase extraction by embedding similarity: segment → vectorize →
//! embed → select. Selection is plain cosine top-N, Max Sum Distance, or
//! Maximal Marginal Relevance.

pub mod engine;
pub mod segmenter;
pub mod selection;
pub mod similarity;
pub mod vectorizer;

pub use engine::KeywordExtractor;
pub use segmenter::{DictionarySegmenter, WhitespaceSegmenter};
pub use vectorizer::CountVectorizer;
