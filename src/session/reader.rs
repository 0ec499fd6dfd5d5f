//! Reading trace documents from disk.
//!
//! The whole file is read into memory before parsing; there is no
//! streaming parse.

use crate::utils::config::SUPPORTED_EXTENSIONS;
use crate::utils::error::TraceError;
use log::{debug, warn};
use std::path::Path;

/// Read a trace dump as UTF-8 text
///
/// **Public** - used by `TraceSession::load_file` and the CLI
///
/// # Errors
/// * `TraceError::InvalidPath` - Empty path or a directory
/// * `TraceError::ReadFailed` - I/O error while reading
/// * `TraceError::DecodeFailed` - Content is not valid UTF-8
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<String, TraceError> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(TraceError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(TraceError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if !is_supported_extension(path) {
        warn!(
            "{} does not have a trace extension ({}), parsing anyway",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        );
    }

    let bytes = std::fs::read(path).map_err(|source| TraceError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(String::from_utf8(bytes)?)
}

/// Whether the file carries one of the expected trace extensions
pub fn is_supported_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("run.txt"));
        assert!(is_supported_extension("run.LOG"));
        assert!(is_supported_extension("dir/run.trace"));
        assert!(!is_supported_extension("run.json"));
        assert!(!is_supported_extension("run"));
    }

    #[test]
    fn test_read_any_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "Traces:\nA::a()").unwrap();

        let text = read_trace_file(file.path()).unwrap();
        assert_eq!(text, "Traces:\nA::a()");
    }

    #[test]
    fn test_read_invalid_utf8() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let result = read_trace_file(file.path());
        assert!(matches!(result, Err(TraceError::DecodeFailed(_))));
    }

    #[test]
    fn test_read_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_trace_file(dir.path()),
            Err(TraceError::InvalidPath(_))
        ));
    }
}
