//! Rebuild the call hierarchy of one trace section.
//!
//! Depth comes straight from the indentation glyphs and is often
//! inconsistent in hand-edited or truncated output, so the builder repairs
//! instead of rejecting:
//! - depth 0 starts a new root
//! - depth `d` within the open chain closes back to level `d`
//! - depth past the open chain attaches to the deepest open node
//!   (skipped levels are not synthesized)
//! - non-zero depth with no open root is dropped
//!
//! Nodes are first collected in an index arena so the open chain can be a
//! plain `Vec<usize>`, then folded into owned nested nodes.

use super::line::classify_line;
use super::schema::TraceNode;
use crate::utils::config::NODE_ID_PREFIX;
use log::{debug, trace};

struct ArenaNode {
    node: TraceNode,
    parent: Option<usize>,
}

/// Build the forest for one section
///
/// **Public** - called once per section by the section aggregator
///
/// # Arguments
/// * `lines` - Raw lines of the section, blank lines included
/// * `id_offset` - Counter value of the section's first line
///
/// # Returns
/// Root nodes of the section in document order
pub fn build_section(lines: &[&str], id_offset: usize) -> Vec<TraceNode> {
    let mut arena: Vec<ArenaNode> = Vec::new();
    // Open ancestor chain: position `i` holds the node at depth `i`
    let mut stack: Vec<usize> = Vec::new();
    let mut dropped = 0usize;

    for (line_index, line) in lines.iter().enumerate() {
        let Some(classified) = classify_line(line) else {
            continue;
        };

        let depth = classified.depth;
        let id = format!("{}{}", NODE_ID_PREFIX, id_offset + line_index);

        let parent = if depth == 0 {
            stack.clear();
            None
        } else if depth <= stack.len() {
            stack.truncate(depth);
            stack.last().copied()
        } else if let Some(&deepest) = stack.last() {
            trace!(
                "{}: depth {} skips past open depth {}, attaching to deepest node",
                id,
                depth,
                stack.len()
            );
            Some(deepest)
        } else {
            dropped += 1;
            trace!("{}: depth {} with no open root, dropped", id, depth);
            continue;
        };

        let mut node = classified.into_node(id);
        node.parent = parent.map(|p| arena[p].node.id.clone());

        stack.push(arena.len());
        arena.push(ArenaNode { node, parent });
    }

    if dropped > 0 {
        debug!("Dropped {} orphan lines without an open root", dropped);
    }

    fold_arena(arena)
}

/// Convert the index arena into owned nested nodes.
///
/// Parents always precede their children in the arena, so walking it
/// backwards finishes every child before its parent is taken.
fn fold_arena(arena: Vec<ArenaNode>) -> Vec<TraceNode> {
    let parents: Vec<Option<usize>> = arena.iter().map(|entry| entry.parent).collect();
    let mut slots: Vec<Option<TraceNode>> = arena.into_iter().map(|entry| Some(entry.node)).collect();
    let mut roots = Vec::new();

    for index in (0..slots.len()).rev() {
        let Some(mut node) = slots[index].take() else {
            continue;
        };
        // Children were pushed last-first
        node.children.reverse();

        match parents[index] {
            Some(parent) => {
                if let Some(parent_node) = slots[parent].as_mut() {
                    parent_node.children.push(node);
                }
            }
            None => roots.push(node),
        }
    }

    roots.reverse();
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_calls() {
        let lines = [
            "[100] Vault::deposit(5)",
            "  ├─ [50] Token::transferFrom(0x1, 0x2, 5) [call]",
            "  │   └─ ← [Return] true",
            "  └─ ← [Stop]",
        ];
        let roots = build_section(&lines, 0);

        assert_eq!(roots.len(), 1);
        let root = &roots[0];
        assert_eq!(root.id, "line-0");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].id, "line-1");
        assert_eq!(root.children[0].children[0].id, "line-2");
        assert_eq!(root.children[1].id, "line-3");
        assert!(root.children[1].is_return);
    }

    #[test]
    fn test_parent_links_are_eager() {
        let lines = ["A::a()", "├─ B::b()", "│  └─ C::c()"];
        let roots = build_section(&lines, 10);

        let root = &roots[0];
        let child = &root.children[0];
        let grandchild = &child.children[0];
        assert_eq!(root.parent, None);
        assert_eq!(child.parent.as_deref(), Some("line-10"));
        assert_eq!(grandchild.parent.as_deref(), Some("line-11"));
    }

    #[test]
    fn test_skipped_levels_attach_to_deepest() {
        let lines = ["Root::r()", "│ │ └─ Deep::d()"];
        let roots = build_section(&lines, 0);

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children.len(), 1);
        assert_eq!(roots[0].children[0].depth, 3);
    }

    #[test]
    fn test_orphans_before_first_root_are_dropped() {
        let lines = ["├─ Orphan::o()", "│  └─ ← [Stop]", "Root::r()"];
        let roots = build_section(&lines, 0);

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].content, "Root::r()");
        assert!(roots[0].children.is_empty());
    }

    #[test]
    fn test_blank_lines_consume_ids() {
        let lines = ["A::a()", "", "B::b()"];
        let roots = build_section(&lines, 0);

        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1].id, "line-2");
    }
}
