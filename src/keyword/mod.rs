//! Keyword (lexical) retrieval path.
//!
//! This module implements the lexical half of hybrid search: extracting
//! significant terms from a raw query and scoring chunk text by weighted
//! term frequency. Matching is deliberately forgiving: occurrences are
//! counted by case-insensitive substring containment, so a query term
//! "log" also credits "logarithmic".

pub mod extractor;
pub mod scorer;

pub use extractor::KeywordExtractor;
pub use scorer::KeywordScorer;
