//! Trace text parsing.
//!
//! This module handles:
//! - Classifying single lines (depth, call signature, call type, returns)
//! - Rebuilding the call tree of one section from indentation
//! - Splitting a document into sections and combining their forests

pub mod line;
pub mod schema;
pub mod sections;
pub mod tree_builder;

// Re-export main types
pub use line::{classify_line, ClassifiedLine};
pub use schema::{CallType, TraceNode};
pub use sections::{assign_stack_ids, parse_document, split_sections, LineIdCounter};
pub use tree_builder::build_section;
