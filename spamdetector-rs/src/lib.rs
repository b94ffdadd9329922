//! spamdetector-rs: Naive Bayes email spam detector
//!
//! Trains a word-evidence spam model from labeled ham and spam corpora and
//! serves scoring and evaluation results over a REST API.
//!
//! # Features
//!
//! - **Training**: Word frequencies from labeled folders, merged across
//!   multiple ham sources
//! - **Scoring**: Per-word spam evidence combined by log-odds aggregation
//! - **Evaluation**: Accuracy and precision over labeled test sets
//! - **API**: JSON endpoints for document scores, accuracy, and precision
//!
//! # Example
//!
//! ```no_run
//! use spamdetector_rs::classifier::SpamModel;
//! use spamdetector_rs::corpus::DirectorySource;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = DirectorySource::new("./data");
//!     let ham_folders = vec!["train/ham".to_string(), "train/ham2".to_string()];
//!     let model = SpamModel::train(&source, &ham_folders, "train/spam")?;
//!
//!     println!("{} words in vocabulary", model.vocabulary_size());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`classifier`]: Tokenization, training, scoring, and evaluation
//! - [`corpus`]: Document access for training and test data
//! - [`api`]: REST API server

pub mod api;
pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{DetectorError, Result};
