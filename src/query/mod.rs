//! Read-only queries over a parsed forest.
//!
//! This module transforms a forest into:
//! - Flat pre-order views and id lists (for "expand all")
//! - Search results with ancestor expansion
//! - Summary statistics

pub mod search;
pub mod summary;
pub mod traversal;

// Re-export main types and functions
pub use search::{search, SearchMatches};
pub use summary::{summarize, TraceSummary};
pub use traversal::{collect_all_ids, count_nodes, find_node, flatten, PreOrder};
