//! Result merging for hybrid search.

use std::cmp::Ordering;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::search::response::{MatchType, SearchResult};

/// Relative trust placed in each retrieval signal.
///
/// The defaults reproduce the production weighting. They are tunable
/// parameters, not derived optima; adjust them only with a stated product
/// rationale, since every downstream score expectation shifts with them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankerWeights {
    /// Multiplier applied to semantic (cosine) scores.
    pub semantic: f32,
    /// Multiplier applied to keyword scores.
    pub keyword: f32,
    /// Multiplier applied to results matched by both strategies.
    pub hybrid_boost: f32,
}

impl Default for RankerWeights {
    fn default() -> Self {
        Self {
            semantic: 0.7,
            keyword: 0.3,
            hybrid_boost: 1.2,
        }
    }
}

/// Merges semantic and keyword result lists into one ranked list.
///
/// # Merge algorithm
///
/// 1. Every semantic result is inserted with its score weighted by the
///    semantic weight.
/// 2. Every keyword result either adds its weighted score to an existing
///    entry (marking it matched by both strategies) or is appended as a
///    keyword-only entry.
/// 3. The minimum-score filter, if any, runs against the merged pre-boost
///    scores: a chunk may surface into relevance purely from the keyword
///    contribution even when its semantic score alone is below the bar.
/// 4. Entries matched by both strategies have their score boosted.
/// 5. A stable descending sort ranks the entries; at equal scores,
///    semantic-path entries precede keyword-only entries, each group in
///    its original path order.
/// 6. The list is truncated to the requested size.
///
/// # Examples
///
/// ```
/// use lectern::chunk::Chunk;
/// use lectern::hybrid::HybridRanker;
/// use lectern::search::{MatchType, SearchResult};
///
/// let chunk = Chunk::new("c1", "d1", "u1", "text", vec![1.0]);
/// let semantic = vec![SearchResult::from_chunk(&chunk, 0.9, MatchType::Semantic)];
/// let keyword = vec![SearchResult::from_chunk(&chunk, 2.0, MatchType::Keyword)];
///
/// let ranked = HybridRanker::default().merge(semantic, keyword, None, 10);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].match_type, MatchType::Both);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HybridRanker {
    /// Scoring weights applied during the merge.
    weights: RankerWeights,
}

impl HybridRanker {
    /// Create a new ranker with the given weights.
    pub fn new(weights: RankerWeights) -> Self {
        Self { weights }
    }

    /// The weights this ranker applies.
    pub fn weights(&self) -> RankerWeights {
        self.weights
    }

    /// Merge two individually scored, sorted result lists.
    ///
    /// Both inputs carry raw path scores; weighting happens here. The
    /// output is deduplicated by chunk id, filtered, boosted, ranked, and
    /// truncated to `max_results`.
    pub fn merge(
        &self,
        semantic: Vec<SearchResult>,
        keyword: Vec<SearchResult>,
        min_score: Option<f32>,
        max_results: usize,
    ) -> Vec<SearchResult> {
        let mut merged: Vec<SearchResult> = Vec::with_capacity(semantic.len() + keyword.len());
        let mut slots: AHashMap<String, usize> = AHashMap::with_capacity(semantic.len());

        for mut result in semantic {
            result.score *= self.weights.semantic;
            result.match_type = MatchType::Semantic;
            slots.insert(result.chunk_id.clone(), merged.len());
            merged.push(result);
        }

        for mut result in keyword {
            let weighted = result.score * self.weights.keyword;
            if let Some(&slot) = slots.get(&result.chunk_id) {
                let entry = &mut merged[slot];
                entry.score += weighted;
                entry.match_type = MatchType::Both;
            } else {
                result.score = weighted;
                result.match_type = MatchType::Keyword;
                slots.insert(result.chunk_id.clone(), merged.len());
                merged.push(result);
            }
        }

        // The threshold sees pre-boost scores.
        if let Some(min) = min_score {
            merged.retain(|result| result.score >= min);
        }

        for result in &mut merged {
            if result.match_type == MatchType::Both {
                result.score *= self.weights.hybrid_boost;
            }
        }

        // Stable sort: ties keep insertion order, so semantic-path entries
        // precede keyword-only entries at equal scores.
        merged.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        merged.truncate(max_results);

        merged
    }
}
