//! Natural Language Processing components
//!
//! This module provides text normalization, sentence and word segmentation,
//! and stopword filtering.

pub mod stopwords;
pub mod tokenizer;
