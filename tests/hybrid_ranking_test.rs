use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use lectern::chunk::Chunk;
use lectern::embedding::EmbeddingProvider;
use lectern::hybrid::{HybridRanker, RankerWeights};
use lectern::keyword::{KeywordExtractor, KeywordScorer};
use lectern::search::{MatchType, SearchRequest, SearchResult, SearchService, SearchType};
use lectern::store::MemoryChunkStore;
use lectern::vector::cosine_similarity;

/// Embedder with a fixed vocabulary of query vectors.
#[derive(Debug)]
struct TableEmbedder {
    table: HashMap<String, Vec<f32>>,
}

impl TableEmbedder {
    fn new<const N: usize>(entries: [(&str, Vec<f32>); N]) -> Self {
        Self {
            table: entries
                .into_iter()
                .map(|(text, vector)| (text.to_string(), vector))
                .collect(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for TableEmbedder {
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        self.table
            .get(text)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no vector for {text:?}"))
    }
}

fn result(chunk_id: &str, score: f32) -> SearchResult {
    let chunk = Chunk::new(chunk_id, "d1", "u1", "text", vec![1.0]);
    SearchResult::from_chunk(&chunk, score, MatchType::Semantic)
}

#[test]
fn test_keyword_scoring_worked_example() {
    // Query "binary search algorithm" against a chunk containing two of
    // the three keywords once each: raw score 2 * (1 + 0.5) = 3.0,
    // normalized by text length into occurrences per 100 characters.
    let text = "Binary search runs in logarithmic time";
    let keywords = KeywordExtractor::new().extract("binary search algorithm");
    let score = KeywordScorer::new().score(text, &keywords);

    let expected = 3.0 / (text.len() as f32 / 100.0);
    assert!((score - expected).abs() < 1e-4);
    assert!(score > 7.0 && score < 8.0);
}

#[test]
fn test_hybrid_merge_worked_example() {
    let ranker = HybridRanker::default();

    // Chunk A: semantic 0.9, absent from keyword results.
    // Chunk B: semantic 0.4 and keyword 2.0.
    let semantic = vec![result("a", 0.9), result("b", 0.4)];
    let keyword = vec![result("b", 2.0)];

    let ranked = ranker.merge(semantic, keyword, None, 10);

    // B: (0.4 * 0.7) + (2.0 * 0.3) = 0.88, boosted to 1.056.
    // A: 0.9 * 0.7 = 0.63. B ranks before A.
    assert_eq!(ranked[0].chunk_id, "b");
    assert!((ranked[0].score - 1.056).abs() < 1e-5);
    assert_eq!(ranked[0].match_type, MatchType::Both);
    assert_eq!(ranked[1].chunk_id, "a");
    assert!((ranked[1].score - 0.63).abs() < 1e-5);
    assert_eq!(ranked[1].match_type, MatchType::Semantic);
}

#[test]
fn test_both_match_outranks_single_match_at_equal_merged_score() {
    // Neutral weights isolate the boost itself.
    let ranker = HybridRanker::new(RankerWeights {
        semantic: 1.0,
        keyword: 1.0,
        hybrid_boost: 1.2,
    });

    // "single" merges to 1.0 from one path; "double" merges to 1.0 from
    // two contributions of 0.5.
    let semantic = vec![result("single", 1.0), result("double", 0.5)];
    let keyword = vec![result("double", 0.5)];

    let ranked = ranker.merge(semantic, keyword, None, 10);

    assert_eq!(ranked[0].chunk_id, "double");
    assert_eq!(ranked[0].match_type, MatchType::Both);
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn test_merge_match_type_accounting_is_exact() {
    let ranker = HybridRanker::default();
    let semantic = vec![result("s", 0.8), result("sk", 0.8)];
    let keyword = vec![result("sk", 1.0), result("k", 1.0)];

    let ranked = ranker.merge(semantic, keyword, None, 10);

    assert_eq!(ranked.len(), 3);
    let by_id: HashMap<&str, MatchType> = ranked
        .iter()
        .map(|r| (r.chunk_id.as_str(), r.match_type))
        .collect();
    assert_eq!(by_id["s"], MatchType::Semantic);
    assert_eq!(by_id["sk"], MatchType::Both);
    assert_eq!(by_id["k"], MatchType::Keyword);
}

/// End-to-end hybrid scoring with hand-checkable numbers.
///
/// The corpus and query vectors are chosen so each path's raw scores are
/// exact, letting the final merged scores be verified to the digit.
#[tokio::test]
async fn test_hybrid_end_to_end_scores() -> Result<(), Box<dyn std::error::Error>> {
    let query = "recursion basics";
    let embedder = TableEmbedder::new([(query, vec![1.0, 0.0])]);

    let store = MemoryChunkStore::new();
    let aligned_text = "Recursion means a function calling itself";
    let oblique_text = "Stack frames grow with each nested call";
    store.insert_all(vec![
        Chunk::new("c-aligned", "d1", "u1", aligned_text, vec![1.0, 0.0]),
        Chunk::new("c-oblique", "d1", "u1", oblique_text, vec![0.0, 1.0]),
    ]);

    let service = SearchService::new(Arc::new(store), Arc::new(embedder));
    let response = service
        .search(SearchRequest::new("u1", query).with_search_type(SearchType::Hybrid))
        .await?;

    assert_eq!(response.total_results, 2);

    // c-aligned: cosine 1.0 and one occurrence of "recursion" (the only
    // keyword hit), so it is a boosted both-match.
    let keywords = KeywordExtractor::new().extract(query);
    let keyword_score = KeywordScorer::new().score(aligned_text, &keywords);
    let expected_aligned = (1.0 * 0.7 + keyword_score * 0.3) * 1.2;

    assert_eq!(response.results[0].chunk_id, "c-aligned");
    assert_eq!(response.results[0].match_type, MatchType::Both);
    assert!((response.results[0].score - expected_aligned).abs() < 1e-4);

    // c-oblique: cosine 0.0, no keyword hit, semantic-only entry at 0.0.
    assert_eq!(response.results[1].chunk_id, "c-oblique");
    assert_eq!(response.results[1].match_type, MatchType::Semantic);
    assert!(response.results[1].score.abs() < 1e-6);

    // The response embedding matches what the scorer actually used.
    let echoed = response.query_embedding.as_deref().expect("embedding echoed");
    let self_similarity = cosine_similarity(echoed, &[1.0, 0.0])?;
    assert!((self_similarity - 1.0).abs() < 1e-6);

    Ok(())
}

/// Over-fetching keeps strong keyword-only results that the final cut
/// would otherwise never see.
#[tokio::test]
async fn test_hybrid_overfetch_recovers_keyword_only_results()
-> Result<(), Box<dyn std::error::Error>> {
    let query = "sorting networks";
    let embedder = TableEmbedder::new([(query, vec![1.0, 0.0])]);

    let store = MemoryChunkStore::new();
    // One chunk aligned with the query vector but lexically unrelated.
    store.insert(Chunk::new(
        "c-semantic",
        "d1",
        "u1",
        "An unrelated treatise on teapots",
        vec![1.0, 0.0],
    ));
    // One chunk orthogonal to the query vector but lexically dense.
    store.insert(Chunk::new(
        "c-keyword",
        "d1",
        "u1",
        "Sorting networks sort fixed-size inputs",
        vec![0.0, 1.0],
    ));

    let service = SearchService::new(Arc::new(store), Arc::new(embedder));
    let response = service
        .search(SearchRequest::new("u1", query).with_max_results(1))
        .await?;

    // The lexically dense chunk wins the single slot: its boosted merged
    // keyword contribution beats the purely semantic 0.7.
    assert_eq!(response.total_results, 1);
    assert_eq!(response.results[0].chunk_id, "c-keyword");
    assert_eq!(response.results[0].match_type, MatchType::Both);

    Ok(())
}
