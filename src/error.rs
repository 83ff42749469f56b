//! Error handling for portfolio content loading.
//!
//! The loader recovers from every variant below at its public boundary, so
//! callers of `load`, `load_projects` and `load_certifications` never see
//! them. They surface through `try_load` and through the CLI.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {path}")]
    FileMissing { path: PathBuf },

    #[error("Content file could not be read: {path} - {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Row at line {line} in {path} is missing expected fields: {}", .missing.join(", "))]
    RowMissingField {
        path: PathBuf,
        line: u64,
        missing: Vec<String>,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ContentError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
