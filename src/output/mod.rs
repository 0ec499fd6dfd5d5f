//! Output writers for parsed traces.
//!
//! This module handles presenting a forest:
//! - Syntax-highlight tokens for trace content
//! - Terminal tree rendering
//! - JSON exports

pub mod highlight;
pub mod json;
pub mod text;

// Re-export main functions
pub use highlight::{tokenize, Span, SpanKind};
pub use json::{export_to_string, read_export, write_export, TraceExport};
pub use text::{render_session, render_tree, RenderConfig, RenderState};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
