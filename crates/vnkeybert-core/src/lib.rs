//! # vnkeybert-core
//!
//! Foundation crate for keyphrase extraction.
//! Defines the shared types, collaborator traits, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod cancellation;
pub mod config;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use cancellation::Cancellation;
pub use config::{EmbeddingConfig, ExtractionConfig, KeyBertConfig};
pub use errors::{KeyBertError, KeyBertResult};
pub use models::{ExtractionOutput, Keyword, NgramRange, SelectionStrategy};
