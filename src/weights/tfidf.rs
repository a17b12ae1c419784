//! Term weighting over a single document.
//!
//! Classic TF-IDF collapses when the corpus is exactly one document: the
//! inverse document frequency `1 + ln(N / (1 + df))` becomes the constant
//! `1 + ln(1/2)` for every present term, so a term's weight is its raw
//! count times that constant and ranking within the document is purely
//! frequency-driven. That degeneracy is part of the scoring contract, not
//! an accident to correct; keep it when touching this module.

use rustc_hash::FxHashMap;

use crate::types::Document;

/// Inverse document frequency shared by every term of a one-document
/// corpus: `1 + ln(N / (1 + df))` with `N = 1` and `df = 1`.
pub const SINGLE_DOCUMENT_IDF: f64 = 1.0 - std::f64::consts::LN_2;

/// Term frequencies weighted by [`SINGLE_DOCUMENT_IDF`].
///
/// Term keys are normalized by trimming non-alphanumeric edge characters
/// and lowercasing, applied identically at build and lookup time, so
/// `"Dogs."` and `"dogs"` resolve to the same entry. The table counts every
/// term, stopwords included; callers filter before looking up.
#[derive(Debug, Clone, Default)]
pub struct TermWeightTable {
    weights: FxHashMap<String, f64>,
}

impl TermWeightTable {
    /// Build the table from a document's normalized text.
    pub fn from_document(document: &Document) -> Self {
        Self::from_text(document.normalized())
    }

    /// Build the table from arbitrary text.
    pub fn from_text(text: &str) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for word in text.split_whitespace() {
            if let Some(term) = normalize_term(word) {
                *counts.entry(term).or_insert(0) += 1;
            }
        }

        let weights = counts
            .into_iter()
            .map(|(term, count)| (term, count as f64 * SINGLE_DOCUMENT_IDF))
            .collect();

        Self { weights }
    }

    /// Weight of a term; unknown terms (and terms that normalize to
    /// nothing) weigh 0.
    pub fn weight(&self, term: &str) -> f64 {
        match normalize_term(term) {
            Some(key) => self.weights.get(&key).copied().unwrap_or(0.0),
            None => 0.0,
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` when the document had no terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The `n` heaviest terms, weight-descending, ties broken by term.
    pub fn top_n(&self, n: usize) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = self
            .weights
            .iter()
            .map(|(term, weight)| (term.clone(), *weight))
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        entries.truncate(n);
        entries
    }
}

/// Strip non-alphanumeric edge characters and lowercase.
///
/// Returns `None` when nothing alphanumeric remains.
fn normalize_term(word: &str) -> Option<String> {
    let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
