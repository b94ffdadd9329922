//! Reduces folders of documents into corpus-level word frequencies

use tracing::debug;

use crate::classifier::frequency::{count_tokens, merge};
use crate::classifier::types::FrequencyMap;
use crate::classifier::Tokenizer;
use crate::corpus::source::DocumentSource;
use crate::error::Result;

/// Tokenizes labeled folders and folds per-document counts into one map
pub struct CorpusLoader<'a> {
    source: &'a dyn DocumentSource,
    tokenizer: Tokenizer,
}

impl<'a> CorpusLoader<'a> {
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self {
            source,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Tokenize every document under the folder and fold the per-document
    /// counts into one corpus map. Returns the map together with the number
    /// of documents, which is the denominator for word probabilities.
    pub fn load_folder(&self, folder: &str) -> Result<(FrequencyMap, u32)> {
        let documents = self.source.list_documents(folder)?;

        let mut corpus = FrequencyMap::new();
        for document in &documents {
            let counts = count_tokens(self.tokenizer.tokenize(&document.content));
            corpus = merge(&corpus, &counts);
        }

        debug!("Loaded {} documents from {}", documents.len(), folder);

        Ok((corpus, documents.len() as u32))
    }
}
