//! Chunk storage boundary.
//!
//! The retrieval core reads its working set through the [`ChunkStore`]
//! trait and never writes to it: chunks are produced by the ingestion
//! pipeline and are read-only inputs here. The store returns everything it
//! holds for a user; the core scores it. This linear-scan contract is the
//! reference behavior that an indexed store (for example an approximate
//! nearest-neighbor structure) must reproduce when swapped in behind the
//! trait.

pub mod memory;

pub use memory::MemoryChunkStore;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::chunk::Chunk;

/// Per-user, append-only collection of embedded text chunks.
///
/// Implementations may be remote and slow; the search service applies its
/// own deadline and wraps failures into retrieval errors.
#[async_trait]
pub trait ChunkStore: Send + Sync + Debug {
    /// Return every chunk owned by `user_id`.
    ///
    /// An unknown user yields an empty list, not an error. There is no
    /// pagination contract beyond "returns everything for that user";
    /// callers needing pagination must wrap this store.
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Chunk>>;

    /// Return every chunk of one document owned by `user_id`.
    async fn list_by_document(&self, user_id: &str, document_id: &str)
    -> anyhow::Result<Vec<Chunk>>;
}
