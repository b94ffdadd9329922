//! Document scoring by log-odds evidence aggregation

use crate::classifier::model::SpamModel;
use crate::classifier::types::DocumentScore;
use crate::classifier::Tokenizer;
use crate::corpus::source::Document;

/// Scores documents against a trained model
pub struct DocumentScorer<'a> {
    model: &'a SpamModel,
    tokenizer: Tokenizer,
}

impl<'a> DocumentScorer<'a> {
    pub fn new(model: &'a SpamModel) -> Self {
        Self {
            model,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Probability that the text is spam.
    ///
    /// Every token occurrence with evidence e strictly between 0 and 1
    /// contributes ln((1 - e) / e) to the log-odds sum n; evidence of
    /// exactly 0.0 or 1.0 is skipped. The final score is 1 / (1 + e^n),
    /// so a document with no contributing tokens scores exactly 0.5.
    pub fn score_text(&self, text: &str) -> f64 {
        let mut n = 0.0f64;

        for token in self.tokenizer.tokenize(text) {
            let evidence = self.model.evidence(&token);

            if evidence != 0.0 && evidence != 1.0 {
                n += ((1.0 - evidence) / evidence).ln();
            }
        }

        1.0 / (1.0 + n.exp())
    }

    /// Score a document, pairing the probability with the document name
    pub fn score_document(&self, document: &Document) -> DocumentScore {
        DocumentScore {
            file: document.name.clone(),
            spam_probability: self.score_text(&document.content),
        }
    }
}
