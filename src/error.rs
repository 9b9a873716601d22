// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failure while serializing a rendered tree to document bytes.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Package error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("The {encoder} encoder cannot encode a {tree} tree")]
    UnsupportedTree {
        encoder: &'static str,
        tree: &'static str,
    },
}

/// A comprehensive error type for export, encoding and delivery.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Encoding '{filename}' failed: {source}")]
    EncodingFailure {
        filename: String,
        #[source]
        source: EncodeError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not write '{}': {source}", path.display())]
    Delivery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid lesson plan JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("A batch export needs at least one lesson plan")]
    EmptyBatch,
}
