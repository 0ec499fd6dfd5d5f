//! Case-insensitive substring search with ancestor expansion.
//!
//! A match on a nested call is useless unless the path down to it is
//! visible, so the result carries the id of every ancestor of every hit.
//! The parent relation is re-derived during the walk itself, so the result
//! is correct even for forests whose `parent` fields were never filled.

use crate::parser::TraceNode;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Outcome of a search over a forest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchMatches {
    /// Nodes whose content contains the query, in pre-order
    pub hits: Vec<String>,

    /// Hits plus all of their ancestors
    pub ids: HashSet<String>,
}

impl SearchMatches {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

/// Search node content for `query`
///
/// **Public** - main entry point for search
///
/// # Arguments
/// * `forest` - Parsed roots
/// * `query` - Substring to look for; empty or whitespace-only clears the result
///
/// # Returns
/// Direct hits and the expanded id set (hits plus ancestors)
pub fn search(forest: &[TraceNode], query: &str) -> SearchMatches {
    if query.trim().is_empty() {
        return SearchMatches::default();
    }

    let needle = query.to_lowercase();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut hits: Vec<&TraceNode> = Vec::new();

    let mut pending: Vec<&TraceNode> = forest.iter().rev().collect();
    while let Some(node) = pending.pop() {
        if node.content.to_lowercase().contains(&needle) {
            hits.push(node);
        }
        for child in node.children.iter().rev() {
            parents.insert(child.id.as_str(), node.id.as_str());
            pending.push(child);
        }
    }

    let mut ids = HashSet::new();
    for hit in &hits {
        let mut current = hit.id.as_str();
        // Stop early once a chain joins one that is already recorded
        while ids.insert(current.to_string()) {
            match parents.get(current) {
                Some(&parent) => current = parent,
                None => break,
            }
        }
    }

    debug!(
        "Search '{}': {} hits, {} highlighted nodes",
        query,
        hits.len(),
        ids.len()
    );

    SearchMatches {
        hits: hits.iter().map(|node| node.id.clone()).collect(),
        ids,
    }
}
