//! Document access for training and test corpora

use std::fs;
use std::path::PathBuf;

use crate::error::{DetectorError, Result};

/// A raw document and the name it is reported under
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub content: String,
}

/// Source of labeled documents, addressed by folder path relative to the
/// corpus root (e.g. "train/ham").
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource: Send + Sync {
    /// List every document directly under the given folder
    fn list_documents(&self, folder: &str) -> Result<Vec<Document>>;
}

/// Filesystem-backed document source
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at the given data directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for DirectorySource {
    fn list_documents(&self, folder: &str) -> Result<Vec<Document>> {
        let dir = self.root.join(folder);

        let entries =
            fs::read_dir(&dir).map_err(|_| DetectorError::NotFound(folder.to_string()))?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| DetectorError::NotFound(folder.to_string()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let content = fs::read(&path).map_err(|e| DetectorError::UnreadableDocument {
                path: path.display().to_string(),
                source: e,
            })?;

            documents.push(Document {
                name: entry.file_name().to_string_lossy().to_string(),
                // Mail corpora are not reliably UTF-8
                content: String::from_utf8_lossy(&content).into_owned(),
            });
        }

        // Name order keeps listings reproducible across filesystems
        documents.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(documents)
    }
}
