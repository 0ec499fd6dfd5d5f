use crate::output::read_export;
use crate::query::count_nodes;
use crate::utils::config::{SCHEMA_VERSION, SUPPORTED_EXTENSIONS};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a JSON export file
pub fn validate_export_file(file_path: PathBuf) -> Result<()> {
    println!("Validating export: {}", file_path.display());

    let export = read_export(&file_path)?;

    let nodes = count_nodes(&export.traces);
    if nodes != export.summary.nodes {
        anyhow::bail!(
            "Summary lists {} nodes but the export contains {}",
            export.summary.nodes,
            nodes
        );
    }

    println!("✓ Valid trace export");
    println!("  Version: {}", export.version);
    println!("  Source: {}", export.source);
    println!("  Generated: {}", export.generated_at);
    println!("  Call Stacks: {}", export.summary.stacks);
    println!("  Nodes: {}", nodes);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Forge Trace Studio Export Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Trace file the export was read from");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!("  summary: object          - Stack/node counts, calls by type, contracts");
        println!("  traces: array            - Top-level call stacks");
        println!("    id: string             - Unique node id (line-<n>)");
        println!("    content: string        - Trimmed trace line");
        println!("    raw: string            - Copy of content");
        println!("    depth: number          - Indentation glyph count");
        println!("    contractName: string?  - Contract of Contract::function(...)");
        println!("    functionName: string?  - Function of Contract::function(...)");
        println!("    callType: string?      - call | staticcall | delegatecall");
        println!("    isReturn: bool         - Line is a return/stop marker");
        println!("    isEvent: bool          - Line emits an event");
        println!("    gas: number?           - Gas column of call lines");
        println!("    parent: string?        - Parent node id");
        println!("    stackId: number        - Index of the owning top-level stack");
        println!("    children: array        - Nested calls, in document order");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Forge Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Export Schema: v{}", SCHEMA_VERSION);
    println!("Trace files: .{}", SUPPORTED_EXTENSIONS.join(", ."));
    println!();
    println!("Call-tree viewer for Foundry/forge execution traces.");
}
