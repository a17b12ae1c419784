//! Core data types shared across the crate.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::nlp::tokenizer;

/// An input text paired with its normalized form.
///
/// Normalization trims surrounding whitespace and collapses internal runs to
/// single spaces. Both forms are kept: character counts are reported against
/// the raw input, while segmentation and selection work on the normalized
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw: String,
    normalized: String,
}

impl Document {
    /// Create a document, normalizing the raw text once.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = tokenizer::normalize(&raw);
        Self { raw, normalized }
    }

    /// The text exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The trimmed text with whitespace runs collapsed.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// A sentence within a document's normalized text.
///
/// The index is assigned at segmentation time and travels with the sentence,
/// so reordering after selection never has to look a sentence up by value
/// (which would misplace duplicates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Sentence text, terminal punctuation included.
    pub text: String,
    /// Zero-based position in the document's sentence sequence.
    pub index: usize,
    /// Byte offset of the sentence start in the normalized text.
    pub start: usize,
    /// Byte offset one past the sentence end.
    pub end: usize,
}

/// A sentence paired with its combined factor score.
#[derive(Debug, Clone)]
pub struct ScoredSentence {
    /// The scored sentence.
    pub sentence: Sentence,
    /// Sum of the five weighted scoring factors.
    pub score: f64,
}

/// The output of summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined in document order.
    pub text: String,
    /// Character count of the raw input.
    pub original_length: usize,
    /// Character count of the summary text.
    pub summary_length: usize,
}

impl Summary {
    /// Build a summary, measuring the text's character length.
    pub fn new(text: impl Into<String>, original_length: usize) -> Self {
        let text = text.into();
        let summary_length = text.chars().count();
        Self {
            text,
            original_length,
            summary_length,
        }
    }

    /// Ratio of summary characters to original characters.
    ///
    /// Returns 0 for an empty original.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.summary_length as f64 / self.original_length as f64
    }
}

/// Policy constants for sentence scoring and selection.
///
/// The defaults reproduce the standard scoring behavior; change them only
/// when a different length/position policy is wanted. All fields are plain
/// data so configurations can round-trip through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Combination weight of the term-weight factor.
    pub term_weight: f64,
    /// Combination weight of the first/last position factor.
    pub position_weight: f64,
    /// Combination weight of the sentence-length factor.
    pub length_weight: f64,
    /// Combination weight of the keyword-presence factor.
    pub keyword_weight: f64,
    /// Combination weight of the relative-position factor.
    pub relative_position_weight: f64,
    /// Multiplier applied to summed term weights before combination.
    pub term_multiplier: f64,
    /// Fraction of sentences the selector keeps.
    pub selection_ratio: f64,
    /// Lower bound on the number of selected sentences.
    pub min_sentences: usize,
    /// Documents with at most this many sentences skip selection entirely.
    pub passthrough_limit: usize,
    /// Word counts strictly above this earn the length factor.
    pub length_factor_min: usize,
    /// Word counts strictly below this earn the length factor.
    pub length_factor_max: usize,
    /// Non-stopword words strictly longer than this count as keywords.
    pub keyword_min_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            term_weight: 0.4,
            position_weight: 0.2,
            length_weight: 0.15,
            keyword_weight: 0.15,
            relative_position_weight: 0.1,
            term_multiplier: 2.0,
            selection_ratio: 0.3,
            min_sentences: 2,
            passthrough_limit: 2,
            length_factor_min: 5,
            length_factor_max: 20,
            keyword_min_chars: 4,
        }
    }
}

impl SummarizerConfig {
    /// Check configuration invariants.
    ///
    /// The five combination weights must sum to 1, the selection ratio must
    /// land in `(0, 1]`, at least one sentence must be selectable, and the
    /// length-factor band must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let weight_sum = self.term_weight
            + self.position_weight
            + self.length_weight
            + self.keyword_weight
            + self.relative_position_weight;
        if !weight_sum.is_finite() || (weight_sum - 1.0).abs() > 1e-9 {
            return Err(Error::InvalidConfig(format!(
                "factor weights sum to {weight_sum}, expected 1.0"
            )));
        }
        if !(self.selection_ratio > 0.0 && self.selection_ratio <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "selection_ratio {} outside (0, 1]",
                self.selection_ratio
            )));
        }
        if self.min_sentences == 0 {
            return Err(Error::InvalidConfig(
                "min_sentences must be at least 1".to_string(),
            ));
        }
        if self.length_factor_min >= self.length_factor_max {
            return Err(Error::InvalidConfig(format!(
                "length factor band ({}, {}) is empty",
                self.length_factor_min, self.length_factor_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_normalizes() {
        let doc = Document::new("  Dogs   bark.\n\tCats meow.  ");
        assert_eq!(doc.raw(), "  Dogs   bark.\n\tCats meow.  ");
        assert_eq!(doc.normalized(), "Dogs bark. Cats meow.");
    }

    #[test]
    fn test_document_empty() {
        let doc = Document::new("   ");
        assert_eq!(doc.normalized(), "");
    }

    #[test]
    fn test_summary_lengths() {
        let summary = Summary::new("Dogs bark.", 20);
        assert_eq!(summary.summary_length, 10);
        assert_eq!(summary.original_length, 20);
        assert!((summary.compression_ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_compression_ratio_empty_original() {
        let summary = Summary::new("", 0);
        assert_eq!(summary.compression_ratio(), 0.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SummarizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_weight_sum_rejected() {
        let config = SummarizerConfig {
            term_weight: 0.9,
            ..SummarizerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig(msg)) if msg.contains("factor weights")
        ));
    }

    #[test]
    fn test_bad_selection_ratio_rejected() {
        for ratio in [0.0, -0.1, 1.5, f64::NAN] {
            let config = SummarizerConfig {
                selection_ratio: ratio,
                ..SummarizerConfig::default()
            };
            assert!(config.validate().is_err(), "ratio {ratio} should fail");
        }
    }

    #[test]
    fn test_empty_length_band_rejected() {
        let config = SummarizerConfig {
            length_factor_min: 20,
            length_factor_max: 20,
            ..SummarizerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_min_sentences_rejected() {
        let config = SummarizerConfig {
            min_sentences: 0,
            ..SummarizerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SummarizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SummarizerConfig::default());

        let config: SummarizerConfig =
            serde_json::from_str(r#"{ "selection_ratio": 0.5 }"#).unwrap();
        assert!((config.selection_ratio - 0.5).abs() < 1e-12);
        assert_eq!(config.min_sentences, 2);
    }
}
