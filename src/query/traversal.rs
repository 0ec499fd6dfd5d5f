//! Whole-forest traversal helpers.
//!
//! Traces can nest thousands of calls deep, so every walk uses an explicit
//! work stack instead of recursion.

use crate::parser::TraceNode;

/// Lazy pre-order iterator over a forest
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    pending: Vec<&'a TraceNode>,
}

impl<'a> PreOrder<'a> {
    pub fn new(forest: &'a [TraceNode]) -> Self {
        Self {
            pending: forest.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TraceNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Every node of the forest in document order.
/// Each call starts a fresh walk.
pub fn flatten(forest: &[TraceNode]) -> PreOrder<'_> {
    PreOrder::new(forest)
}

/// Ids of every node, in pre-order. Used for "expand all".
pub fn collect_all_ids(forest: &[TraceNode]) -> Vec<String> {
    flatten(forest).map(|node| node.id.clone()).collect()
}

pub fn find_node<'a>(forest: &'a [TraceNode], id: &str) -> Option<&'a TraceNode> {
    flatten(forest).find(|node| node.id == id)
}

pub fn count_nodes(forest: &[TraceNode]) -> usize {
    flatten(forest).count()
}
