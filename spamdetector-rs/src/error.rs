use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Folder not found: {0}")]
    NotFound(String),

    #[error("Unreadable document {path}: {source}")]
    UnreadableDocument {
        path: String,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DetectorError>;
