//! Forge Trace Studio
//!
//! Parses the call traces printed by `forge test -vvvv` into a call tree,
//! and provides search, summary and rendering on top of it.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install forge-trace-studio
//! forge test -vvvv > run.trace
//! forge-trace view --file run.trace --expand-all
//! forge-trace search --file run.trace --query transfer
//! ```
//!
//! As a library:
//!
//! ```
//! use forge_trace_studio::parser::parse_document;
//! use forge_trace_studio::query::search;
//!
//! let forest = parse_document("Traces:\nA::b(1,2)\n  └─ ← [Return]");
//! assert_eq!(forest[0].function_name.as_deref(), Some("b"));
//! assert!(search(&forest, "return").contains("line-0"));
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod query;
pub mod session;
pub mod utils;
