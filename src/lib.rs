//! # Lectern
//!
//! A hybrid semantic + keyword retrieval library for searching a user's
//! uploaded document corpus.
//!
//! Lectern turns a text query into a ranked list of relevant text chunks by
//! running two retrieval strategies (embedding similarity and weighted
//! keyword matching) and merging them into a single deduplicated,
//! filtered, ranked result set.
//!
//! ## Features
//!
//! - Cosine-similarity semantic scoring over precomputed chunk embeddings
//! - Keyword scoring with stop-word removal and length normalization
//! - Weighted hybrid merging with match-type provenance and boosting
//! - Per-user corpus scoping with document and topic filters
//! - Pluggable `ChunkStore` and `EmbeddingProvider` collaborators
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lectern::chunk::Chunk;
//! use lectern::search::{SearchRequest, SearchService, SearchType};
//! use lectern::store::MemoryChunkStore;
//!
//! # use async_trait::async_trait;
//! # #[derive(Debug)]
//! # struct StubEmbedder;
//! # #[async_trait]
//! # impl lectern::embedding::EmbeddingProvider for StubEmbedder {
//! #     async fn embed(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
//! #         Ok(vec![1.0, 0.0, 0.0])
//! #     }
//! # }
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> lectern::error::Result<()> {
//! let store = Arc::new(MemoryChunkStore::new());
//! store.insert(Chunk::new(
//!     "c1",
//!     "doc-1",
//!     "user-1",
//!     "Binary search runs in logarithmic time",
//!     vec![1.0, 0.0, 0.0],
//! ));
//!
//! let service = SearchService::new(store, Arc::new(StubEmbedder));
//! let request = SearchRequest::new("user-1", "binary search")
//!     .with_search_type(SearchType::Hybrid)
//!     .with_max_results(5);
//!
//! let response = service.search(request).await?;
//! assert_eq!(response.total_results, 1);
//! # Ok(())
//! # }
//! ```

pub mod chunk;
pub mod embedding;
pub mod error;
pub mod hybrid;
pub mod keyword;
pub mod search;
pub mod store;
pub mod vector;

pub mod prelude {
    //! Convenience re-exports of the main library types.

    pub use crate::chunk::{Chunk, ChunkMetadata};
    pub use crate::embedding::EmbeddingProvider;
    pub use crate::error::{LecternError, Result};
    pub use crate::hybrid::{HybridRanker, RankerWeights};
    pub use crate::keyword::{KeywordExtractor, KeywordScorer};
    pub use crate::search::{
        MatchType, SearchFilters, SearchRequest, SearchResponse, SearchResult, SearchService,
        SearchType,
    };
    pub use crate::store::{ChunkStore, MemoryChunkStore};
    pub use crate::vector::cosine_similarity;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
