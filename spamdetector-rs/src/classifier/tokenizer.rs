//! Word extraction from raw document text

use regex::Regex;

/// Splits document text into lowercase alphabetic words
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    /// Create a tokenizer with the word pattern compiled once
    pub fn new() -> Self {
        Self {
            word: Regex::new("^[a-z]*$").expect("invalid word pattern"),
        }
    }

    /// Check whether a candidate qualifies as a word.
    ///
    /// The empty string is rejected explicitly; the pattern alone would
    /// accept it. The check does not lowercase, so mixed-case input fails.
    pub fn is_word(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        self.word.is_match(candidate)
    }

    /// Split text on whitespace, lowercase each candidate, and keep only
    /// those that qualify as words.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split_whitespace()
            .map(|candidate| candidate.to_lowercase())
            .filter(move |candidate| self.is_word(candidate))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
