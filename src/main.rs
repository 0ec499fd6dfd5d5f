//! Forge Trace Studio CLI
//!
//! Call-tree viewer for Foundry/forge execution traces.
//! Renders, searches and exports the traces printed by `forge test -vvvv`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use forge_trace_studio::commands::{
    display_schema, display_version, execute_export, execute_view, validate_args,
    validate_export_file, ExportArgs, ViewArgs,
};

/// Forge Trace Studio - call trees for forge traces
#[derive(Parser, Debug)]
#[command(name = "forge-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the call tree of a trace dump
    View {
        /// Trace dump (.txt, .log, .trace)
        #[arg(short, long)]
        file: PathBuf,

        /// Expand every call instead of showing top-level stacks only
        #[arg(short, long)]
        expand_all: bool,

        /// Deepest tree level to draw
        #[arg(long)]
        max_depth: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Print summary statistics after the tree
        #[arg(long)]
        summary: bool,
    },

    /// Search trace content and show the path to every match
    Search {
        /// Trace dump (.txt, .log, .trace)
        #[arg(short, long)]
        file: PathBuf,

        /// Case-insensitive substring to look for
        #[arg(short, long)]
        query: String,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Parse a trace dump and write it as JSON
    Export {
        /// Trace dump (.txt, .log, .trace)
        #[arg(short, long)]
        file: PathBuf,

        /// Output path for the JSON export
        #[arg(short, long, default_value = "traces.json")]
        output: PathBuf,
    },

    /// Validate a JSON export file
    Validate {
        /// Path to export JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::View {
            file,
            expand_all,
            max_depth,
            no_color,
            summary,
        } => {
            execute_view(ViewArgs {
                input: file,
                query: None,
                expand_all,
                max_depth,
                color: !no_color,
                print_summary: summary,
            })?;
        }

        Commands::Search {
            file,
            query,
            no_color,
        } => {
            execute_view(ViewArgs {
                input: file,
                query: Some(query),
                color: !no_color,
                ..Default::default()
            })?;
        }

        Commands::Export { file, output } => {
            let args = ExportArgs {
                input: file,
                output,
            };

            // Validate args first
            validate_args(&args)?;

            execute_export(args)?;
        }

        Commands::Validate { file } => {
            validate_export_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
