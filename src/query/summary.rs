//! Aggregate statistics over a parsed forest.
//!
//! Gives a quick picture of a trace dump before drilling into the tree:
//! how many call stacks, how deep they go, and what kinds of calls they make.

use super::traversal::flatten;
use crate::parser::{CallType, TraceNode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Statistics for one forest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSummary {
    /// Number of top-level call stacks
    pub stacks: usize,

    /// Total number of nodes
    pub nodes: usize,

    /// Deepest indentation seen
    pub max_depth: usize,

    /// Calls by type (`call`, `staticcall`, `delegatecall`)
    pub calls_by_type: BTreeMap<String, usize>,

    pub returns: usize,

    pub events: usize,

    /// Distinct contract names, sorted
    pub contracts: Vec<String>,

    /// Sum of the gas column over top-level calls
    pub root_gas: u64,
}

impl TraceSummary {
    pub fn call_count(&self, call_type: CallType) -> usize {
        self.calls_by_type
            .get(&call_type.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} stacks, {} nodes, max depth {}, {} contracts, {} returns, {} events",
            self.stacks,
            self.nodes,
            self.max_depth,
            self.contracts.len(),
            self.returns,
            self.events
        )
    }
}

/// Compute statistics for a forest
///
/// **Public** - used by the CLI summary and JSON export
pub fn summarize(forest: &[TraceNode]) -> TraceSummary {
    let mut summary = TraceSummary {
        stacks: forest.len(),
        root_gas: forest.iter().filter_map(|root| root.gas).sum(),
        ..Default::default()
    };
    let mut contracts = BTreeSet::new();

    for node in flatten(forest) {
        summary.nodes += 1;
        summary.max_depth = summary.max_depth.max(node.depth);

        if let Some(call_type) = node.call_type {
            *summary
                .calls_by_type
                .entry(call_type.to_string())
                .or_insert(0) += 1;
        }
        if node.is_return {
            summary.returns += 1;
        }
        if node.is_event {
            summary.events += 1;
        }
        if let Some(contract) = &node.contract_name {
            contracts.insert(contract.clone());
        }
    }

    summary.contracts = contracts.into_iter().collect();
    summary
}
