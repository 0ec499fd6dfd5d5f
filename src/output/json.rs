//! JSON export of a parsed forest.
//!
//! Writes TraceExport structs to JSON files with proper formatting.

use crate::parser::TraceNode;
use crate::query::{summarize, TraceSummary};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Top-level structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the traces were read from
    pub source: String,

    /// Timestamp when the export was generated
    pub generated_at: String,

    pub summary: TraceSummary,

    pub traces: Vec<TraceNode>,
}

impl TraceExport {
    pub fn new(source: impl Into<String>, traces: Vec<TraceNode>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: Utc::now().to_rfc3339(),
            summary: summarize(&traces),
            traces,
        }
    }
}

/// Write an export to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_export(export: &TraceExport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing export to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, export).map_err(OutputError::SerializationFailed)?;

    info!(
        "Export written successfully ({} stacks, {} nodes)",
        export.summary.stacks, export.summary.nodes
    );

    Ok(())
}

/// Serialize an export to a pretty JSON string
pub fn export_to_string(export: &TraceExport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(export).map_err(OutputError::SerializationFailed)
}

/// Read an export back from a JSON file
///
/// # Errors
/// * `OutputError::ReadFailed` - File cannot be opened
/// * `OutputError::DeserializationFailed` - Not a valid export document
pub fn read_export(input_path: impl AsRef<Path>) -> Result<TraceExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading export from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;

    // Every trace level nests an object and a `children` array, so the default
    // recursion limit would reject exports past ~63 levels.
    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));
    deserializer.disable_recursion_limit();
    let export = TraceExport::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(OutputError::DeserializationFailed)?;
    deserializer
        .end()
        .map_err(OutputError::DeserializationFailed)?;

    debug!(
        "Export loaded: version {}, source {}",
        export.version, export.source
    );

    Ok(export)
}
