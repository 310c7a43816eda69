//! Search request types, filters, and validation.

use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;
use crate::error::{LecternError, Result};

/// Default number of results returned when the request does not say.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Which retrieval strategies a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Embedding similarity only.
    Semantic,
    /// Weighted keyword matching only.
    Keyword,
    /// Both strategies, merged and boosted.
    #[default]
    Hybrid,
}

impl SearchType {
    /// Get the name of this search type.
    pub fn name(&self) -> &'static str {
        match self {
            SearchType::Semantic => "semantic",
            SearchType::Keyword => "keyword",
            SearchType::Hybrid => "hybrid",
        }
    }

    /// Parse a search type from a string.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "semantic" => Ok(SearchType::Semantic),
            "keyword" => Ok(SearchType::Keyword),
            "hybrid" => Ok(SearchType::Hybrid),
            _ => Err(LecternError::invalid_request(format!(
                "unknown search type: {s}"
            ))),
        }
    }
}

/// Optional restrictions applied to the candidate set.
///
/// The document and topic filters restrict which chunks may be scored at
/// all and are conjunctive with each other. The score threshold is
/// independent of both: in single-strategy searches it applies to the
/// path score, in hybrid searches to the merged pre-boost score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Allowed document ids. Empty means no restriction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_ids: Vec<String>,
    /// Allowed topics, matched by substring against the chunk's topic tag.
    /// Empty means no restriction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    /// Minimum relevance score a result must reach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f32>,
}

impl SearchFilters {
    /// Restrict results to the given document ids.
    pub fn with_document_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_ids = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Restrict results to chunks tagged with one of the given topics.
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Require a minimum relevance score.
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Whether no filter is set at all.
    pub fn is_empty(&self) -> bool {
        self.document_ids.is_empty() && self.topics.is_empty() && self.min_score.is_none()
    }

    /// Whether `chunk` passes the document and topic filters.
    ///
    /// The score threshold is not part of this check; it is applied to
    /// scores, not chunks.
    pub fn allows(&self, chunk: &Chunk) -> bool {
        if !self.document_ids.is_empty()
            && !self.document_ids.iter().any(|id| *id == chunk.document_id)
        {
            return false;
        }

        if !self.topics.is_empty() {
            let Some(topic) = chunk.metadata.topic.as_deref() else {
                return false;
            };
            if !self.topics.iter().any(|t| topic.contains(t.as_str())) {
                return false;
            }
        }

        true
    }
}

/// A search over one user's chunk corpus.
///
/// # Examples
///
/// ```
/// use lectern::search::{SearchFilters, SearchRequest, SearchType};
///
/// let request = SearchRequest::new("user-1", "binary search")
///     .with_search_type(SearchType::Semantic)
///     .with_max_results(5)
///     .with_filters(SearchFilters::default().with_topics(vec!["algorithms"]));
///
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Owning tenant whose chunks are searched.
    pub user_id: String,
    /// The raw query text.
    pub query: String,
    /// Maximum number of results to return.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Which retrieval strategies to run.
    #[serde(default)]
    pub search_type: SearchType,
    /// Optional candidate restrictions.
    #[serde(default, skip_serializing_if = "SearchFilters::is_empty")]
    pub filters: SearchFilters,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl SearchRequest {
    /// Create a new request with default limit, type, and filters.
    pub fn new(user_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
            search_type: SearchType::default(),
            filters: SearchFilters::default(),
        }
    }

    /// Set the maximum number of results.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the search type.
    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    /// Set the filters.
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Parse a request from its JSON wire form.
    ///
    /// Malformed JSON and unknown search types surface as
    /// [`LecternError::InvalidRequest`]; the parsed request still needs
    /// [`validate`](Self::validate) before use.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|err| LecternError::invalid_request(format!("malformed request: {err}")))
    }

    /// Validate the request before any retrieval or embedding call.
    ///
    /// Embedding calls are the most expensive operation in a search, so a
    /// malformed request must be rejected before one is made.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(LecternError::invalid_request("user_id must not be empty"));
        }
        if self.query.trim().is_empty() {
            return Err(LecternError::invalid_request("query must not be empty"));
        }
        if self.max_results == 0 {
            return Err(LecternError::invalid_request("max_results must be positive"));
        }
        Ok(())
    }
}
