//! Vector (semantic) retrieval path.
//!
//! Semantic scoring compares a query embedding against precomputed chunk
//! embeddings with cosine similarity. The similarity function is the only
//! numeric primitive the retrieval core owns; embedding generation itself
//! lives behind the [`EmbeddingProvider`](crate::embedding::EmbeddingProvider)
//! boundary.

pub mod similarity;

pub use similarity::cosine_similarity;
