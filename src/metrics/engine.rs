//! Metric report assembly and side-by-side comparison.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::nlp::stopwords::StopwordFilter;

use super::discourse;
use super::overlap;

/// The five quality metrics for one candidate summary, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Jaccard similarity between original and candidate word sets.
    pub similarity: f64,
    /// Share of the original's content vocabulary kept by the candidate.
    pub retention: f64,
    /// Share of the candidate's content vocabulary found in the original.
    pub relevance: f64,
    /// Adjacent-sentence lexical cohesion of the candidate.
    pub coherence: f64,
    /// Share of well-formed sentences in the candidate.
    pub fluency: f64,
}

/// Side-by-side evaluation of two candidate summaries of one original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryComparison {
    /// Metric report for the first candidate.
    pub candidate_a: MetricsReport,
    /// Metric report for the second candidate.
    pub candidate_b: MetricsReport,
    /// Character length of the first candidate.
    pub length_a: usize,
    /// Character length of the second candidate.
    pub length_b: usize,
    /// Absolute character-length difference.
    pub length_delta: usize,
    /// Word count of the first candidate.
    pub word_count_a: usize,
    /// Word count of the second candidate.
    pub word_count_b: usize,
    /// Absolute word-count difference.
    pub word_count_delta: usize,
    /// Jaccard similarity between the two candidates.
    pub cross_similarity: f64,
}

/// Computes metric reports and comparisons with a fixed stopword filter.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    stopwords: StopwordFilter,
}

impl MetricsEngine {
    /// Engine with the standard stopword filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a caller-supplied filter.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Jaccard similarity between two texts.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        overlap::jaccard_similarity(a, b)
    }

    /// Content-vocabulary recall of `summary` against `original`.
    pub fn retention(&self, original: &str, summary: &str) -> f64 {
        overlap::information_retention(original, summary, &self.stopwords)
    }

    /// Content-vocabulary precision of `summary` against `original`.
    pub fn relevance(&self, original: &str, summary: &str) -> f64 {
        overlap::relevance(original, summary, &self.stopwords)
    }

    /// Adjacent-sentence cohesion of `summary`.
    pub fn coherence(&self, summary: &str) -> f64 {
        discourse::coherence(summary, &self.stopwords)
    }

    /// Share of well-formed sentences in `summary`.
    pub fn fluency(&self, summary: &str) -> f64 {
        discourse::fluency(summary, &self.stopwords)
    }

    /// Full metric report for one candidate summary.
    ///
    /// Total over all inputs: empty strings score the degenerate values
    /// rather than erroring.
    pub fn evaluate(&self, original: &str, candidate: &str) -> MetricsReport {
        MetricsReport {
            similarity: self.similarity(original, candidate),
            retention: self.retention(original, candidate),
            relevance: self.relevance(original, candidate),
            coherence: self.coherence(candidate),
            fluency: self.fluency(candidate),
        }
    }

    /// Evaluate two candidate summaries against the same original.
    ///
    /// Returns [`Error::InvalidInput`] when `original` is empty; empty
    /// candidates are allowed and score the degenerate values.
    pub fn compare(
        &self,
        original: &str,
        candidate_a: &str,
        candidate_b: &str,
    ) -> Result<SummaryComparison> {
        if original.is_empty() {
            return Err(Error::InvalidInput("text is required".to_string()));
        }

        let length_a = candidate_a.chars().count();
        let length_b = candidate_b.chars().count();
        let word_count_a = candidate_a.split_whitespace().count();
        let word_count_b = candidate_b.split_whitespace().count();

        #[cfg(feature = "tracing")]
        tracing::debug!(length_a, length_b, "comparing candidate summaries");

        Ok(SummaryComparison {
            candidate_a: self.evaluate(original, candidate_a),
            candidate_b: self.evaluate(original, candidate_b),
            length_a,
            length_b,
            length_delta: length_a.abs_diff(length_b),
            word_count_a,
            word_count_b,
            word_count_delta: word_count_a.abs_diff(word_count_b),
            cross_similarity: overlap::jaccard_similarity(candidate_a, candidate_b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINAL: &str = "Dogs are loyal animals. They protect their owners. \
                            Dogs require regular exercise. Many people love dogs.";

    #[test]
    fn test_evaluate_identity() {
        let engine = MetricsEngine::new();
        let report = engine.evaluate(ORIGINAL, ORIGINAL);

        assert_eq!(report.similarity, 1.0);
        assert_eq!(report.retention, 1.0);
        assert_eq!(report.relevance, 1.0);
    }

    #[test]
    fn test_evaluate_empty_candidate() {
        let engine = MetricsEngine::new();
        let report = engine.evaluate(ORIGINAL, "");

        assert_eq!(report.similarity, 0.0);
        assert_eq!(report.retention, 0.0);
        assert_eq!(report.relevance, 0.0);
        assert_eq!(report.coherence, 1.0); // zero sentences
        assert_eq!(report.fluency, 0.0);
    }

    #[test]
    fn test_report_bounds() {
        let engine = MetricsEngine::new();
        let report = engine.evaluate(ORIGINAL, "Dogs are loyal animals. Many people love dogs.");

        for value in [
            report.similarity,
            report.retention,
            report.relevance,
            report.coherence,
            report.fluency,
        ] {
            assert!((0.0..=1.0).contains(&value), "metric {value} out of bounds");
        }
    }

    #[test]
    fn test_report_serializes_to_snake_case_json() {
        let engine = MetricsEngine::new();
        let report = engine.evaluate(ORIGINAL, "Dogs are loyal animals.");
        let json = serde_json::to_value(report).unwrap();

        for key in ["similarity", "retention", "relevance", "coherence", "fluency"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_compare_empty_original_is_rejected() {
        let engine = MetricsEngine::new();
        let result = engine.compare("", "Dogs bark.", "Cats meow.");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_compare_length_and_word_stats() {
        let engine = MetricsEngine::new();
        let comparison = engine
            .compare(ORIGINAL, "Dogs are loyal animals.", "Many people love dogs. They do.")
            .unwrap();

        assert_eq!(comparison.length_a, 23);
        assert_eq!(comparison.length_b, 31);
        assert_eq!(comparison.length_delta, 8);
        assert_eq!(comparison.word_count_a, 4);
        assert_eq!(comparison.word_count_b, 6);
        assert_eq!(comparison.word_count_delta, 2);
    }

    #[test]
    fn test_compare_identical_candidates() {
        let engine = MetricsEngine::new();
        let comparison = engine
            .compare(ORIGINAL, "Dogs are loyal.", "Dogs are loyal.")
            .unwrap();

        assert_eq!(comparison.cross_similarity, 1.0);
        assert_eq!(comparison.length_delta, 0);
        assert_eq!(comparison.word_count_delta, 0);
        assert_eq!(comparison.candidate_a, comparison.candidate_b);
    }

    #[test]
    fn test_compare_swapping_candidates_swaps_reports() {
        let engine = MetricsEngine::new();
        let a = "Dogs are loyal animals.";
        let b = "Many people love dogs.";

        let forward = engine.compare(ORIGINAL, a, b).unwrap();
        let backward = engine.compare(ORIGINAL, b, a).unwrap();

        assert_eq!(forward.candidate_a, backward.candidate_b);
        assert_eq!(forward.candidate_b, backward.candidate_a);
        assert_eq!(forward.length_delta, backward.length_delta);
        assert_eq!(forward.cross_similarity, backward.cross_similarity);
    }

    #[test]
    fn test_custom_stopword_filter_changes_scores() {
        let all_words = MetricsEngine::with_stopwords(StopwordFilter::empty());
        let standard = MetricsEngine::new();

        // With an empty filter, "the" counts as retained content.
        let original = "the dogs";
        let summary = "the";
        assert_eq!(standard.retention(original, summary), 0.0);
        assert!((all_words.retention(original, summary) - 0.5).abs() < 1e-12);
    }
}
