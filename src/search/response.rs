//! Search response types.

use serde::{Deserialize, Serialize};

use crate::chunk::{Chunk, ChunkMetadata};
use crate::search::request::SearchType;

/// Which retrieval strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Found by embedding similarity only.
    Semantic,
    /// Found by keyword matching only.
    Keyword,
    /// Found by both strategies; its score carries the hybrid boost.
    Both,
}

impl MatchType {
    /// Get the name of this match type.
    pub fn name(&self) -> &'static str {
        match self {
            MatchType::Semantic => "semantic",
            MatchType::Keyword => "keyword",
            MatchType::Both => "both",
        }
    }
}

/// A single ranked search result.
///
/// The score is a relative rank value: higher is more relevant, with no
/// fixed upper bound once hybrid boosting is applied. Scores are only
/// comparable within one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched chunk.
    pub chunk_id: String,
    /// The chunk's owning document.
    pub document_id: String,
    /// The chunk's text content.
    pub text: String,
    /// Relevance score; higher is more relevant.
    pub score: f32,
    /// Metadata carried over from the chunk.
    #[serde(default)]
    pub metadata: ChunkMetadata,
    /// Which strategy (or both) matched this chunk.
    pub match_type: MatchType,
}

impl SearchResult {
    /// Build a result from a scored chunk.
    pub fn from_chunk(chunk: &Chunk, score: f32, match_type: MatchType) -> Self {
        Self {
            chunk_id: chunk.chunk_id.clone(),
            document_id: chunk.document_id.clone(),
            text: chunk.text.clone(),
            score,
            metadata: chunk.metadata.clone(),
            match_type,
        }
    }
}

/// The ordered outcome of one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Results ordered most relevant first.
    pub results: Vec<SearchResult>,
    /// Number of results returned.
    pub total_results: usize,
    /// Echo of the search type that produced this response.
    pub search_type: SearchType,
    /// The raw query embedding, for caller-side caching and debugging.
    /// Absent for keyword searches, which never embed the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_embedding: Option<Vec<f32>>,
}

impl SearchResponse {
    /// Create a response from ranked results.
    pub fn new(
        results: Vec<SearchResult>,
        search_type: SearchType,
        query_embedding: Option<Vec<f32>>,
    ) -> Self {
        let total_results = results.len();
        Self {
            results,
            total_results,
            search_type,
            query_embedding,
        }
    }

    /// Serialize the response to its JSON wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
