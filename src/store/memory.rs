//! In-memory chunk store for tests and temporary corpora.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::chunk::Chunk;
use crate::store::ChunkStore;

/// An in-memory [`ChunkStore`] implementation.
///
/// Chunks are held per user in insertion order, which makes listing
/// deterministic. Useful for testing and for small corpora that fit in
/// memory; it also serves as the deterministic fake that the search
/// service's dependency injection is designed around.
///
/// # Examples
///
/// ```
/// use lectern::chunk::Chunk;
/// use lectern::store::MemoryChunkStore;
///
/// let store = MemoryChunkStore::new();
/// store.insert(Chunk::new("c1", "d1", "u1", "some text", vec![1.0, 0.0]));
/// assert_eq!(store.chunk_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryChunkStore {
    /// Chunks grouped by owning user, in insertion order.
    chunks: RwLock<HashMap<String, Vec<Chunk>>>,
}

impl MemoryChunkStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single chunk.
    pub fn insert(&self, chunk: Chunk) {
        let mut chunks = self.chunks.write();
        chunks.entry(chunk.user_id.clone()).or_default().push(chunk);
    }

    /// Insert every chunk from an iterator.
    pub fn insert_all<I>(&self, iter: I)
    where
        I: IntoIterator<Item = Chunk>,
    {
        let mut chunks = self.chunks.write();
        for chunk in iter {
            chunks.entry(chunk.user_id.clone()).or_default().push(chunk);
        }
    }

    /// Remove every chunk of one document. Returns the number removed.
    pub fn remove_document(&self, user_id: &str, document_id: &str) -> usize {
        let mut chunks = self.chunks.write();
        match chunks.get_mut(user_id) {
            Some(user_chunks) => {
                let before = user_chunks.len();
                user_chunks.retain(|c| c.document_id != document_id);
                before - user_chunks.len()
            }
            None => 0,
        }
    }

    /// Total number of chunks across all users.
    pub fn chunk_count(&self) -> usize {
        self.chunks.read().values().map(Vec::len).sum()
    }

    /// Whether the store holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunk_count() == 0
    }

    /// Remove all chunks for all users.
    pub fn clear(&self) {
        self.chunks.write().clear();
    }
}

#[async_trait]
impl ChunkStore for MemoryChunkStore {
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Chunk>> {
        let chunks = self.chunks.read();
        Ok(chunks.get(user_id).cloned().unwrap_or_default())
    }

    async fn list_by_document(
        &self,
        user_id: &str,
        document_id: &str,
    ) -> anyhow::Result<Vec<Chunk>> {
        let chunks = self.chunks.read();
        Ok(chunks
            .get(user_id)
            .map(|user_chunks| {
                user_chunks
                    .iter()
                    .filter(|c| c.document_id == document_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
