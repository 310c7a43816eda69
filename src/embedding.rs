//! Embedding provider boundary.
//!
//! The retrieval core treats embedding generation as an opaque external
//! call: text in, fixed-length vector out. Implementations typically wrap a
//! remote model endpoint and may be slow; the search service applies its
//! own deadline and wraps failures, so providers only need to surface their
//! underlying error.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use lectern::embedding::EmbeddingProvider;
//!
//! #[derive(Debug)]
//! struct UnitEmbedder {
//!     dimension: usize,
//! }
//!
//! #[async_trait]
//! impl EmbeddingProvider for UnitEmbedder {
//!     async fn embed(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
//!         Ok(vec![0.0; self.dimension])
//!     }
//!
//!     fn name(&self) -> &str {
//!         "unit"
//!     }
//! }
//! ```

use std::fmt::Debug;

use async_trait::async_trait;

/// Maps a text string to a fixed-length embedding vector.
///
/// All vectors returned by one provider must share the same dimensionality
/// as the chunk embeddings they will be compared against.
///
/// Implementations must be `Send + Sync` so a single provider can serve
/// concurrent search requests.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate an embedding vector for the given text.
    ///
    /// # Errors
    ///
    /// Returns the provider's underlying error on failure; the caller wraps
    /// it into an embedding failure with request context attached.
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>>;

    /// Name of this provider, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}
