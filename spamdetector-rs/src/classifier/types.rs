//! Classifier types and data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Word occurrence counts for a document or corpus
pub type FrequencyMap = HashMap<String, u32>;

/// Class of a labeled document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassLabel {
    Ham,
    Spam,
}

/// Aggregated training data for one class
#[derive(Debug, Clone)]
pub struct CorpusStats {
    /// Class the corpus is labeled as
    pub label: ClassLabel,
    /// Summed word frequencies across every document
    pub frequencies: FrequencyMap,
    /// Number of documents the corpus contains
    pub documents: u32,
}

/// Spam probability assigned to a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentScore {
    /// Document file name
    pub file: String,
    /// Probability the document is spam
    pub spam_probability: f64,
}

/// Outcome of evaluating the model against labeled test folders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Correct predictions over all test documents
    pub accuracy: f64,
    /// Correct ham predictions over all ham test documents
    pub precision: f64,
    /// Ham test documents scored strictly below 0.5
    pub correct_ham: u32,
    /// Spam test documents scored strictly above 0.5
    pub correct_spam: u32,
    /// Number of ham test documents scored
    pub total_ham: u32,
    /// Number of spam test documents scored
    pub total_spam: u32,
}
