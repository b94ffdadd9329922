//! Document corpus access
//!
//! Loads labeled email folders through a pluggable document source.

pub mod loader;
pub mod source;

pub use loader::CorpusLoader;
pub use source::{DirectorySource, Document, DocumentSource};
