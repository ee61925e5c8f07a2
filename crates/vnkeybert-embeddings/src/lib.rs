//! # vnkeybert-embeddings
//!
//! Turns documents and candidate phrases into fixed-size vectors.
//! `EmbeddingEngine` fronts any `IEmbeddingProvider` with an L1 cache,
//! chunked batching, and shape validation.

pub mod cache;
pub mod engine;
pub mod providers;
pub mod validation;

pub use engine::EmbeddingEngine;
pub use providers::{create_provider, HashingProvider};
