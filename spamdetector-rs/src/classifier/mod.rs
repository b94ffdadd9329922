//! Naive Bayes spam classifier
//!
//! Trains a word-evidence model from labeled corpora and scores documents
//! with log-odds aggregation.

pub mod evaluator;
pub mod frequency;
pub mod model;
pub mod scorer;
pub mod tokenizer;
pub mod types;

pub use model::SpamModel;
pub use scorer::DocumentScorer;
pub use tokenizer::Tokenizer;
pub use types::*;
