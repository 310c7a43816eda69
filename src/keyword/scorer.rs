//! Keyword scoring by weighted term frequency.

use serde::{Deserialize, Serialize};

/// Default flat bonus added once per keyword that appears at least once.
pub const DEFAULT_PRESENCE_BONUS: f32 = 0.5;

/// Scores chunk text against a list of extracted query keywords.
///
/// Each keyword contributes its substring occurrence count plus a flat
/// presence bonus, and the sum is normalized to occurrences per 100
/// characters of chunk text so shorter chunks are not penalized relative
/// to longer ones. The presence bonus intentionally double-counts the
/// first occurrence's weight to reward presence over mere frequency.
///
/// The bonus is a tunable parameter, not a derived constant; the default
/// matches the production weighting.
///
/// # Examples
///
/// ```
/// use lectern::keyword::KeywordScorer;
///
/// let scorer = KeywordScorer::new();
/// let keywords = vec!["binary".to_string(), "search".to_string()];
///
/// let score = scorer.score("Binary search halves the search space", &keywords);
/// assert!(score > 0.0);
///
/// assert_eq!(scorer.score("unrelated text", &keywords), 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordScorer {
    /// Flat score added once per matched keyword.
    presence_bonus: f32,
}

impl KeywordScorer {
    /// Create a new scorer with the default presence bonus.
    pub fn new() -> Self {
        KeywordScorer {
            presence_bonus: DEFAULT_PRESENCE_BONUS,
        }
    }

    /// Override the presence bonus.
    pub fn with_presence_bonus(mut self, bonus: f32) -> Self {
        self.presence_bonus = bonus;
        self
    }

    /// Score `text` against pre-extracted `keywords`.
    ///
    /// Occurrences are counted case-insensitively by literal substring
    /// containment, so partial-word matches count. Returns exactly 0.0 when
    /// no keyword occurs in the text; keyword result sets must exclude such
    /// chunks.
    pub fn score(&self, text: &str, keywords: &[String]) -> f32 {
        if text.is_empty() || keywords.is_empty() {
            return 0.0;
        }

        let lowered = text.to_lowercase();
        let mut raw = 0.0f32;

        for keyword in keywords {
            let occurrences = lowered.matches(keyword.as_str()).count();
            if occurrences > 0 {
                raw += occurrences as f32 + self.presence_bonus;
            }
        }

        if raw == 0.0 {
            return 0.0;
        }

        // Normalize to occurrences per 100 characters of chunk text.
        raw / (text.len() as f32 / 100.0)
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}
