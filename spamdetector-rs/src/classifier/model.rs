//! Trained word-evidence model
//!
//! Word probabilities follow the corpus counts directly: P(word|class) is the
//! word's occurrence count divided by the number of documents in the class.
//! Per-word spam evidence is P(word|spam) / (P(word|spam) + P(word|ham)).

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::info;

use crate::classifier::frequency::merge;
use crate::classifier::types::{ClassLabel, CorpusStats, FrequencyMap};
use crate::corpus::loader::CorpusLoader;
use crate::corpus::source::DocumentSource;
use crate::error::Result;

/// Immutable Naive Bayes model trained once from labeled corpora
#[derive(Debug)]
pub struct SpamModel {
    ham: CorpusStats,
    spam: CorpusStats,
    prob_word_ham: HashMap<String, f64>,
    prob_word_spam: HashMap<String, f64>,
    evidence: HashMap<String, f64>,
    trained_at: DateTime<Utc>,
}

impl SpamModel {
    /// Train a model: load every ham folder (merged into one ham corpus) and
    /// the spam folder, then derive per-word probabilities and spam evidence.
    /// Any unreadable folder or document aborts training.
    pub fn train(
        source: &dyn DocumentSource,
        ham_folders: &[String],
        spam_folder: &str,
    ) -> Result<Self> {
        let loader = CorpusLoader::new(source);

        let mut ham_frequencies = FrequencyMap::new();
        let mut ham_documents = 0u32;
        for folder in ham_folders {
            let (frequencies, documents) = loader.load_folder(folder)?;
            ham_frequencies = merge(&ham_frequencies, &frequencies);
            ham_documents += documents;
        }

        let (spam_frequencies, spam_documents) = loader.load_folder(spam_folder)?;

        let prob_word_ham = class_probabilities(&ham_frequencies, ham_documents);
        let prob_word_spam = class_probabilities(&spam_frequencies, spam_documents);
        let evidence = spam_evidence(&prob_word_spam, &prob_word_ham);

        info!(
            "Trained model: {} ham documents, {} spam documents, {} distinct words",
            ham_documents,
            spam_documents,
            evidence.len()
        );

        Ok(Self {
            ham: CorpusStats {
                label: ClassLabel::Ham,
                frequencies: ham_frequencies,
                documents: ham_documents,
            },
            spam: CorpusStats {
                label: ClassLabel::Spam,
                frequencies: spam_frequencies,
                documents: spam_documents,
            },
            prob_word_ham,
            prob_word_spam,
            evidence,
            trained_at: Utc::now(),
        })
    }

    /// P(word|ham); 0.0 for words absent from the ham training data
    pub fn p_word_given_ham(&self, word: &str) -> f64 {
        self.prob_word_ham.get(word).copied().unwrap_or(0.0)
    }

    /// P(word|spam); 0.0 for words absent from the spam training data
    pub fn p_word_given_spam(&self, word: &str) -> f64 {
        self.prob_word_spam.get(word).copied().unwrap_or(0.0)
    }

    /// Pr(spam|word); 0.0 for words never seen in training
    pub fn evidence(&self, word: &str) -> f64 {
        self.evidence.get(word).copied().unwrap_or(0.0)
    }

    /// Training stats for the merged ham corpus
    pub fn ham_stats(&self) -> &CorpusStats {
        &self.ham
    }

    /// Training stats for the spam corpus
    pub fn spam_stats(&self) -> &CorpusStats {
        &self.spam
    }

    /// Number of distinct words seen in either class
    pub fn vocabulary_size(&self) -> usize {
        self.evidence.len()
    }

    /// When the model was trained
    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }
}

/// P(word|class) for every word of a class map: count / document count.
/// A count above the document count pushes the ratio past 1.0 and is kept
/// as-is.
fn class_probabilities(frequencies: &FrequencyMap, documents: u32) -> HashMap<String, f64> {
    let mut probabilities = HashMap::new();
    for (word, &count) in frequencies {
        probabilities.insert(word.clone(), f64::from(count) / f64::from(documents));
    }

    probabilities
}

/// Pr(spam|word) over the union of words seen in either class:
/// p_spam / (p_spam + p_ham), or 0.0 when both inputs are zero.
fn spam_evidence(
    prob_spam: &HashMap<String, f64>,
    prob_ham: &HashMap<String, f64>,
) -> HashMap<String, f64> {
    let mut evidence = HashMap::new();

    for word in prob_spam.keys().chain(prob_ham.keys()) {
        if evidence.contains_key(word) {
            continue;
        }

        let p_spam = prob_spam.get(word).copied().unwrap_or(0.0);
        let p_ham = prob_ham.get(word).copied().unwrap_or(0.0);

        let value = if p_spam + p_ham == 0.0 {
            0.0
        } else {
            p_spam / (p_spam + p_ham)
        };
        evidence.insert(word.clone(), value);
    }

    evidence
}
