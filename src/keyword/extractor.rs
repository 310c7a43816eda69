//! Query keyword extraction.
//!
//! Turns a raw query string into the list of significant terms the keyword
//! scorer counts: lowercase, punctuation stripped, whitespace split, short
//! tokens dropped, stop words removed.
//!
//! # Examples
//!
//! ```
//! use lectern::keyword::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::new();
//! let keywords = extractor.extract("What is the binary search algorithm?");
//!
//! assert_eq!(keywords, vec!["binary", "search", "algorithm"]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Tokens at most this many bytes long are dropped during extraction.
const MAX_SHORT_TOKEN_LEN: usize = 2;

/// Default stop words list.
///
/// Articles, conjunctions, common wh-words, and modal verbs that carry no
/// retrieval signal in a tutoring query. Words of length two or less never
/// reach the stop-word check because the short-token filter drops them
/// first.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "but", "nor", "yet", "what", "when", "where", "which", "who", "whom", "whose",
    "why", "how", "can", "could", "may", "might", "must", "shall", "should", "will", "would",
    "this", "that", "these", "those", "with", "from", "into", "about", "does", "did", "are", "was",
    "were", "have", "has", "had",
];

/// Default stop words as a HashSet.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Extracts significant keywords from a raw query string.
///
/// # Examples
///
/// ```
/// use lectern::keyword::KeywordExtractor;
///
/// // Custom stop words
/// let extractor = KeywordExtractor::from_words(vec!["please", "explain"]);
/// assert_eq!(
///     extractor.extract("Please explain recursion"),
///     vec!["recursion"]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct KeywordExtractor {
    /// The set of words removed after tokenization.
    stop_words: Arc<HashSet<String>>,
}

impl KeywordExtractor {
    /// Create a new extractor with the default stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a new extractor with a custom stop-word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        KeywordExtractor {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new extractor from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Extract keywords from a raw query.
    ///
    /// Lowercases the query, strips punctuation, splits on whitespace, then
    /// drops tokens of length two or less and stop words. Duplicate terms
    /// are kept: a term repeated in the query contributes twice to scoring.
    ///
    /// An empty result is a valid outcome; the keyword path returns no
    /// results for such a query.
    pub fn extract(&self, query: &str) -> Vec<String> {
        let cleaned: String = query
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| token.len() > MAX_SHORT_TOKEN_LEN)
            .filter(|token| !self.is_stop_word(token))
            .map(|token| token.to_string())
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_lowercases_and_strips_punctuation() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("Explain Dijkstra's Algorithm!");

        assert_eq!(keywords, vec!["explain", "dijkstras", "algorithm"]);
    }

    #[test]
    fn test_extract_drops_short_tokens_and_stop_words() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("what is the time complexity of a hash map");

        assert_eq!(keywords, vec!["time", "complexity", "hash", "map"]);
    }

    #[test]
    fn test_extract_keeps_duplicates() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("sort sort sort");

        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_extract_can_yield_nothing() {
        let extractor = KeywordExtractor::new();

        assert!(extractor.extract("what is the").is_empty());
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("a an of").is_empty());
    }

    #[test]
    fn test_custom_stop_words() {
        let extractor = KeywordExtractor::from_words(vec!["foo", "bar"]);

        assert!(extractor.is_stop_word("foo"));
        assert!(!extractor.is_stop_word("the"));
        assert_eq!(extractor.extract("foo baz bar"), vec!["baz"]);
    }
}
