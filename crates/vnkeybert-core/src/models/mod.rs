mod corpus;
mod embedding_set;
mod keyword;
mod ngram_range;
mod output;
mod selection;

pub use corpus::{DocumentTermMatrix, VectorizedCorpus};
pub use embedding_set::EmbeddingSet;
pub use keyword::{round_score, Keyword};
pub use ngram_range::NgramRange;
pub use output::ExtractionOutput;
pub use selection::SelectionStrategy;
