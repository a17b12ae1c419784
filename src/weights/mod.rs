//! Term weighting
//!
//! Provides the TF-IDF term-weight table that drives the term-weight
//! scoring factor.

pub mod tfidf;

pub use tfidf::{TermWeightTable, SINGLE_DOCUMENT_IDF};
