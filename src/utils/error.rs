//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Parsing itself never fails: malformed lines are skipped or reattached.
//! Only reading a document and writing/reading exports can error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trace document
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trace file is not valid UTF-8")]
    DecodeFailed(#[from] std::string::FromUtf8Error),

    #[error("Invalid input path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while writing or reading back an export
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to serialize JSON")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to deserialize JSON")]
    DeserializationFailed(#[source] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
