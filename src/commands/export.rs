//! Export command implementation.

use super::models::ExportArgs;
use crate::output::{write_export, TraceExport};
use crate::parser::parse_document;
use crate::session::read_trace_file;
use anyhow::{Context, Result};
use log::{info, warn};

/// Parse a trace dump and write it as JSON
///
/// **Public** - main entry point called from main.rs
///
/// Unlike the interactive view, a read failure is an error here: there is
/// no point in writing an empty export for a file that could not be read.
pub fn execute_export(args: ExportArgs) -> Result<TraceExport> {
    info!("Exporting {} to {}", args.input.display(), args.output.display());

    let text = read_trace_file(&args.input)
        .with_context(|| format!("Failed to read trace file {}", args.input.display()))?;

    let forest = parse_document(&text);
    if forest.is_empty() {
        warn!("No traces found in {}", args.input.display());
    }

    let export = TraceExport::new(args.input.display().to_string(), forest);
    write_export(&export, &args.output).context("Failed to write trace export")?;

    info!("✓ Export written to: {}", args.output.display());

    Ok(export)
}

/// Validate export arguments
///
/// **Public** - can be called before execute_export for early validation
pub fn validate_args(args: &ExportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.input == args.output {
        anyhow::bail!("Output path must differ from the input path");
    }

    Ok(())
}
