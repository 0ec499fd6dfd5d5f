//! Trace node definitions.
//!
//! A parsed document is a forest: an ordered `Vec<TraceNode>` of roots,
//! each owning its children. The same structs are written to JSON exports,
//! so field names follow the camelCase layout consumers expect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of external call a trace line performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    Call,
    StaticCall,
    DelegateCall,
}

impl CallType {
    /// Literal marker forge prints for this call type
    pub fn marker(self) -> &'static str {
        match self {
            Self::Call => "[call]",
            Self::StaticCall => "[staticcall]",
            Self::DelegateCall => "[delegatecall]",
        }
    }

    /// Detection order when a line carries several markers.
    /// `[staticcall]` wins over `[call]`, which wins over `[delegatecall]`.
    pub const DETECTION_ORDER: [CallType; 3] =
        [Self::StaticCall, Self::Call, Self::DelegateCall];
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Call => "call",
            Self::StaticCall => "staticcall",
            Self::DelegateCall => "delegatecall",
        };
        f.write_str(name)
    }
}

/// One line of a call trace, placed in the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceNode {
    /// Unique within one parsed document (`line-<n>`)
    pub id: String,

    /// Trimmed text of the line, without the indentation prefix
    pub content: String,

    /// Same text as `content`; kept separately for consumers that rewrite one of them
    pub raw: String,

    /// Number of indent glyphs in front of the line
    pub depth: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<CallType>,

    #[serde(default)]
    pub is_return: bool,

    /// Line emits an event (`emit Transfer(...)`)
    #[serde(default)]
    pub is_event: bool,

    /// Gas column printed in front of call lines (`[24523] ...`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,

    /// Id of the structural parent; `None` for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Index of the top-level root this node belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<usize>,

    #[serde(default)]
    pub children: Vec<TraceNode>,
}

impl TraceNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `Contract::function` label when both parts were recognized
    pub fn qualified_name(&self) -> Option<String> {
        match (&self.contract_name, &self.function_name) {
            (Some(contract), Some(function)) => Some(format!("{}::{}", contract, function)),
            _ => None,
        }
    }
}

// Dropping a deeply nested trace would otherwise recurse once per level.
impl Drop for TraceNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
