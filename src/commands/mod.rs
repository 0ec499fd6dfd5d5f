//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod models;
pub mod utils;
pub mod view;

// Re-export main command functions
pub use export::{execute_export, validate_args};
pub use models::{ExportArgs, ViewArgs};
pub use utils::{display_schema, display_version, validate_export_file};
pub use view::execute_view;
