//! Stopword filtering
//!
//! A fixed list of English function words backs the default filter. The
//! list is part of the scoring and metric contracts: the keyword factor and
//! every overlap metric exclude exactly these words, so the filter is
//! injected where it is used rather than derived from input text.

use rustc_hash::FxHashSet;

/// Function words excluded from term weighting and overlap metrics.
pub const DEFAULT_STOPWORDS: [&str; 24] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "about",
    "as", "of", "from", "is", "are", "was", "were", "be", "been", "being",
];

/// A filter for recognizing stopwords
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(&DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create the standard filter over [`DEFAULT_STOPWORDS`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
