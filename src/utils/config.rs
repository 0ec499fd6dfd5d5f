//! Configuration and constants for the parser, renderer and CLI.

use colored::Color;

/// Current export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Token that opens every trace section in forge output
pub const SECTION_MARKER: &str = "Traces:";

/// Prefix of every generated node id (`line-<n>`)
pub const NODE_ID_PREFIX: &str = "line-";

/// File extensions the CLI expects trace dumps to carry.
/// Advisory only: other extensions are accepted with a warning.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "log", "trace"];

// Indentation glyphs forge draws in front of nested calls
pub const INDENT_GLYPHS: &[char] = &['│', '├', '└'];

/// Depth palette used when no explicit table is configured.
/// Depth `d` is drawn with `DEFAULT_DEPTH_COLORS[d % len]`.
pub const DEFAULT_DEPTH_COLORS: &[Color] = &[
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Message shown when a loaded document yields no traces
pub const NO_TRACES_MESSAGE: &str = "No valid traces found";
