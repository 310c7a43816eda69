//! Chunk data model.
//!
//! A [`Chunk`] is the immutable unit of indexed text: a fragment of a source
//! document with a precomputed embedding and optional display metadata.
//! Chunks are created once per ingested document and never mutated by the
//! retrieval core; every search operation is scoped to the chunks of exactly
//! one user.
//!
//! # Examples
//!
//! ```
//! use lectern::chunk::{Chunk, ChunkMetadata};
//!
//! let chunk = Chunk::new(
//!     "c1",
//!     "doc-1",
//!     "user-1",
//!     "Binary search runs in logarithmic time",
//!     vec![0.1, 0.2, 0.3],
//! )
//! .with_metadata(ChunkMetadata::default().with_topic("algorithms").with_page(12));
//!
//! assert_eq!(chunk.dimension(), 3);
//! assert_eq!(chunk.metadata.topic.as_deref(), Some("algorithms"));
//! ```

use serde::{Deserialize, Serialize};

/// A fragment of a source document's text, embedded and indexed independently.
///
/// All chunk embeddings within one deployment share a fixed dimensionality
/// with the query embeddings they are compared against. A chunk whose
/// embedding violates that invariant is skipped during scoring rather than
/// failing the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique chunk identifier, owned by the chunk store.
    pub chunk_id: String,
    /// Owning document; many chunks per document.
    pub document_id: String,
    /// Owning tenant.
    pub user_id: String,
    /// UTF-8 text content, non-empty.
    pub text: String,
    /// Precomputed embedding vector.
    pub embedding: Vec<f32>,
    /// Optional display metadata.
    #[serde(default)]
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Create a new chunk with empty metadata.
    pub fn new(
        chunk_id: impl Into<String>,
        document_id: impl Into<String>,
        user_id: impl Into<String>,
        text: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            document_id: document_id.into(),
            user_id: user_id.into(),
            text: text.into(),
            embedding,
            metadata: ChunkMetadata::default(),
        }
    }

    /// Attach metadata to this chunk.
    pub fn with_metadata(mut self, metadata: ChunkMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The dimensionality of this chunk's embedding.
    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}

/// Optional metadata attached to a chunk for filtering and display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Topic tag assigned at ingestion time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Page number within the source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Section label within the source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Human-readable name of the source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
}

impl ChunkMetadata {
    /// Set the topic tag.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Set the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the section label.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set the document display name.
    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }
}
