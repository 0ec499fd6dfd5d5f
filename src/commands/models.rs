use std::path::PathBuf;

/// Arguments for the view and search commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ViewArgs {
    /// Trace dump to read
    pub input: PathBuf,

    /// Substring to search for (None = plain view)
    pub query: Option<String>,

    /// Expand every node instead of showing roots only
    pub expand_all: bool,

    /// Deepest tree level to draw
    pub max_depth: Option<usize>,

    /// Emit ANSI colors
    pub color: bool,

    /// Print summary statistics after the tree
    pub print_summary: bool,
}

impl Default for ViewArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            query: None,
            expand_all: false,
            max_depth: None,
            color: true,
            print_summary: false,
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Trace dump to read
    pub input: PathBuf,

    /// Output path for the JSON export
    pub output: PathBuf,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from("traces.json"),
        }
    }
}
