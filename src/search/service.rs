//! Search orchestration.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::embedding::EmbeddingProvider;
use crate::error::{LecternError, Result};
use crate::hybrid::{HybridRanker, RankerWeights};
use crate::keyword::{KeywordExtractor, KeywordScorer};
use crate::search::request::{SearchRequest, SearchType};
use crate::search::response::{MatchType, SearchResponse, SearchResult};
use crate::store::ChunkStore;
use crate::vector::cosine_similarity;

/// Default candidate multiplier for each hybrid sub-search.
pub const DEFAULT_OVERFETCH_FACTOR: usize = 2;

/// Tunable parameters of a [`SearchService`].
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Each hybrid sub-search fetches up to `overfetch_factor * max_results`
    /// candidates so the ranker has enough material to merge.
    pub overfetch_factor: usize,
    /// Deadline applied to each collaborator call. `None` waits forever.
    pub call_timeout: Option<Duration>,
    /// Merge weights for the hybrid ranker.
    pub weights: RankerWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            overfetch_factor: DEFAULT_OVERFETCH_FACTOR,
            call_timeout: None,
            weights: RankerWeights::default(),
        }
    }
}

/// Public entry point of the retrieval core.
///
/// The service is stateless per call: it validates a request, dispatches to
/// the scoring paths its search type asks for, and ranks the candidates
/// into a response. Collaborators are injected, never ambient, so tests
/// substitute deterministic fakes.
///
/// Failures from either collaborator abort the whole request; the core
/// performs no retries and returns no partial results.
pub struct SearchService {
    /// Chunk retrieval collaborator.
    store: Arc<dyn ChunkStore>,
    /// Query embedding collaborator.
    embedder: Arc<dyn EmbeddingProvider>,
    /// Query keyword extraction.
    extractor: KeywordExtractor,
    /// Keyword scoring.
    scorer: KeywordScorer,
    /// Hybrid merge.
    ranker: HybridRanker,
    /// Tunable parameters.
    config: SearchConfig,
}

impl SearchService {
    /// Create a new service with default configuration.
    pub fn new(store: Arc<dyn ChunkStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_config(store, embedder, SearchConfig::default())
    }

    /// Create a new service with explicit configuration.
    pub fn with_config(
        store: Arc<dyn ChunkStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        config: SearchConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            extractor: KeywordExtractor::new(),
            scorer: KeywordScorer::new(),
            ranker: HybridRanker::new(config.weights),
            config,
        }
    }

    /// Replace the keyword extractor, for custom stop-word sets.
    pub fn with_extractor(mut self, extractor: KeywordExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the keyword scorer.
    pub fn with_scorer(mut self, scorer: KeywordScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Execute one search request.
    ///
    /// Validation runs before any external call; embedding calls are the
    /// most expensive operation and must not be made for malformed input.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        request.validate()?;
        debug!(
            user_id = %request.user_id,
            search_type = request.search_type.name(),
            max_results = request.max_results,
            "executing search"
        );

        match request.search_type {
            SearchType::Semantic => self.semantic_search(&request).await,
            SearchType::Keyword => self.keyword_search(&request).await,
            SearchType::Hybrid => self.hybrid_search(&request).await,
        }
    }

    /// Semantic-only search: embed once, score the corpus, rank.
    async fn semantic_search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let query_embedding = self.embed_query(&request.query).await?;
        let mut results = self
            .semantic_candidates(request, &query_embedding, request.max_results)
            .await?;

        if let Some(min) = request.filters.min_score {
            results.retain(|result| result.score >= min);
        }

        Ok(SearchResponse::new(
            results,
            SearchType::Semantic,
            Some(query_embedding),
        ))
    }

    /// Keyword-only search: no embedding call is made at all.
    async fn keyword_search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let keywords = self.extractor.extract(&request.query);
        let mut results = self
            .keyword_candidates(request, &keywords, request.max_results)
            .await?;

        if let Some(min) = request.filters.min_score {
            results.retain(|result| result.score >= min);
        }

        Ok(SearchResponse::new(results, SearchType::Keyword, None))
    }

    /// Hybrid search: both paths run concurrently, then merge.
    ///
    /// Each path over-fetches candidates; the score threshold is left to
    /// the ranker, which applies it to merged pre-boost scores.
    async fn hybrid_search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let query_embedding = self.embed_query(&request.query).await?;
        let keywords = self.extractor.extract(&request.query);
        let fetch_limit = request
            .max_results
            .saturating_mul(self.config.overfetch_factor);

        // The merge is a synchronization barrier: both sub-searches must
        // complete, and either failure aborts the whole request.
        let (semantic, keyword) = futures::try_join!(
            self.semantic_candidates(request, &query_embedding, fetch_limit),
            self.keyword_candidates(request, &keywords, fetch_limit),
        )?;

        let merged = self
            .ranker
            .merge(semantic, keyword, request.filters.min_score, request.max_results);

        Ok(SearchResponse::new(
            merged,
            SearchType::Hybrid,
            Some(query_embedding),
        ))
    }

    /// Score the user's corpus against the query embedding.
    ///
    /// Chunks failing the document or topic filters are never scored. A
    /// chunk whose embedding dimensionality disagrees with the query is
    /// skipped and logged; one corrupt record must not deny service for
    /// the whole user.
    async fn semantic_candidates(
        &self,
        request: &SearchRequest,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let chunks = self.fetch_chunks(&request.user_id).await?;
        let mut results = Vec::new();

        for chunk in &chunks {
            if !request.filters.allows(chunk) {
                continue;
            }
            let score = match cosine_similarity(query_embedding, &chunk.embedding) {
                Ok(score) => score,
                Err(LecternError::DimensionMismatch { expected, actual }) => {
                    warn!(
                        chunk_id = %chunk.chunk_id,
                        expected,
                        actual,
                        "skipping chunk with mismatched embedding dimension"
                    );
                    continue;
                }
                Err(err) => return Err(err),
            };
            results.push(SearchResult::from_chunk(chunk, score, MatchType::Semantic));
        }

        sort_descending(&mut results);
        results.truncate(limit);
        Ok(results)
    }

    /// Score the user's corpus against the extracted keywords.
    ///
    /// Chunks with zero keyword occurrences are excluded; an empty keyword
    /// list yields an empty result set.
    async fn keyword_candidates(
        &self,
        request: &SearchRequest,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let chunks = self.fetch_chunks(&request.user_id).await?;
        let mut results = Vec::new();

        for chunk in &chunks {
            if !request.filters.allows(chunk) {
                continue;
            }
            let score = self.scorer.score(&chunk.text, keywords);
            if score == 0.0 {
                continue;
            }
            results.push(SearchResult::from_chunk(chunk, score, MatchType::Keyword));
        }

        sort_descending(&mut results);
        results.truncate(limit);
        Ok(results)
    }

    /// Embed the query, applying the configured deadline.
    async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
        let embed = self.embedder.embed(query);
        let outcome = match self.config.call_timeout {
            Some(deadline) => tokio::time::timeout(deadline, embed)
                .await
                .map_err(|_| {
                    LecternError::embedding(anyhow::anyhow!(
                        "embedding call exceeded {deadline:?}"
                    ))
                })?,
            None => embed.await,
        };
        outcome.map_err(LecternError::embedding)
    }

    /// Fetch the user's working set, applying the configured deadline.
    async fn fetch_chunks(&self, user_id: &str) -> Result<Vec<crate::chunk::Chunk>> {
        let list = self.store.list_by_user(user_id);
        let outcome = match self.config.call_timeout {
            Some(deadline) => tokio::time::timeout(deadline, list).await.map_err(|_| {
                LecternError::retrieval(anyhow::anyhow!("chunk listing exceeded {deadline:?}"))
            })?,
            None => list.await,
        };
        outcome.map_err(LecternError::retrieval)
    }
}

/// Stable descending sort by score.
fn sort_descending(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
