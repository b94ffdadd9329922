use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub corpus: CorpusConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Restrict CORS to this origin; any origin when unset
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Root directory holding the train/ and test/ folders
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Ham training folders, merged into one corpus
    #[serde(default = "default_train_ham")]
    pub train_ham: Vec<String>,
    #[serde(default = "default_train_spam")]
    pub train_spam: String,
    #[serde(default = "default_test_ham")]
    pub test_ham: String,
    #[serde(default = "default_test_spam")]
    pub test_spam: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_train_ham() -> Vec<String> {
    vec!["train/ham".to_string(), "train/ham2".to_string()]
}

fn default_train_spam() -> String {
    "train/spam".to_string()
}

fn default_test_ham() -> String {
    "test/ham".to_string()
}

fn default_test_spam() -> String {
    "test/spam".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::DetectorError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::DetectorError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: default_listen_addr(),
                cors_origin: None,
            },
            corpus: CorpusConfig {
                data_dir: default_data_dir(),
                train_ham: default_train_ham(),
                train_spam: default_train_spam(),
                test_ham: default_test_ham(),
                test_spam: default_test_spam(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
