//! Hybrid result merging.
//!
//! The hybrid path runs the semantic and keyword searches independently and
//! merges their result lists into one ranked, deduplicated, filtered list.
//! The merge is where the two scoring scales meet: cosine similarity is
//! bounded while keyword density is not, so fixed weights express relative
//! trust in each signal instead of a normalized blend.

pub mod ranker;

pub use ranker::{HybridRanker, RankerWeights};
