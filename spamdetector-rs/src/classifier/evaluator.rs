//! Model evaluation against labeled test folders

use tracing::info;

use crate::classifier::model::SpamModel;
use crate::classifier::scorer::DocumentScorer;
use crate::classifier::types::{ClassLabel, DocumentScore, EvaluationReport};
use crate::corpus::source::DocumentSource;
use crate::error::Result;

/// Score every document under a labeled folder
pub fn score_folder(
    model: &SpamModel,
    source: &dyn DocumentSource,
    folder: &str,
) -> Result<Vec<DocumentScore>> {
    let scorer = DocumentScorer::new(model);
    let documents = source.list_documents(folder)?;

    Ok(documents
        .iter()
        .map(|document| scorer.score_document(document))
        .collect())
}

/// Count scores on the correct side of 0.5 for the given class.
///
/// Ham documents are correct strictly below 0.5 and spam documents strictly
/// above; a score of exactly 0.5 is incorrect for both classes.
pub fn correct_predictions(scores: &[DocumentScore], label: ClassLabel) -> u32 {
    scores
        .iter()
        .filter(|score| match label {
            ClassLabel::Ham => score.spam_probability < 0.5,
            ClassLabel::Spam => score.spam_probability > 0.5,
        })
        .count() as u32
}

/// Evaluate the model over both test folders: accuracy across all test
/// documents, precision over the ham class.
pub fn evaluate(
    model: &SpamModel,
    source: &dyn DocumentSource,
    ham_folder: &str,
    spam_folder: &str,
) -> Result<EvaluationReport> {
    let ham_scores = score_folder(model, source, ham_folder)?;
    let spam_scores = score_folder(model, source, spam_folder)?;

    let total_ham = ham_scores.len() as u32;
    let total_spam = spam_scores.len() as u32;

    let correct_ham = correct_predictions(&ham_scores, ClassLabel::Ham);
    let correct_spam = correct_predictions(&spam_scores, ClassLabel::Spam);

    let accuracy = f64::from(correct_ham + correct_spam) / f64::from(total_ham + total_spam);

    let incorrect_ham = total_ham - correct_ham;
    let precision = f64::from(correct_ham) / f64::from(correct_ham + incorrect_ham);

    info!(
        "Evaluation: accuracy {:.5}, precision {:.5} ({}/{} ham, {}/{} spam)",
        accuracy, precision, correct_ham, total_ham, correct_spam, total_spam
    );

    Ok(EvaluationReport {
        accuracy,
        precision,
        correct_ham,
        correct_spam,
        total_ham,
        total_spam,
    })
}
