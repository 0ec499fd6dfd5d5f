//! Split a full forge output into trace sections and combine their forests.
//!
//! Every `Traces:` marker starts an independent section. Each section is
//! built on its own, but all of them share one line counter so node ids
//! stay unique across the whole document.

use super::schema::TraceNode;
use super::tree_builder::build_section;
use crate::utils::config::SECTION_MARKER;
use log::{debug, info};
use regex::Regex;
use std::sync::OnceLock;

fn section_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"{}\s*", regex::escape(SECTION_MARKER))).unwrap())
}

/// Line-id counter scoped to one parse invocation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineIdCounter {
    next: usize,
}

impl LineIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter value the next section starts at
    pub fn offset(&self) -> usize {
        self.next
    }

    /// Reserve `line_count` ids for a processed section
    pub fn advance(&mut self, line_count: usize) {
        self.next += line_count;
    }
}

/// Split a document on `Traces:` markers, dropping empty segments.
///
/// Text before the first marker is kept as a section of its own when it
/// has any non-whitespace content.
pub fn split_sections(document: &str) -> Vec<&str> {
    section_marker_regex()
        .split(document)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Parse a whole document into one flat forest
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `document` - Full text of a forge trace dump
///
/// # Returns
/// Top-level roots of every section, in section order, with `stack_id`
/// set on every node. Never fails: unusable lines are skipped.
pub fn parse_document(document: &str) -> Vec<TraceNode> {
    let sections = split_sections(document);
    debug!("Found {} trace sections", sections.len());

    let mut counter = LineIdCounter::new();
    let mut forest = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        let lines: Vec<&str> = section.lines().collect();
        let roots = build_section(&lines, counter.offset());

        debug!(
            "Section {}: {} lines, {} roots",
            index,
            lines.len(),
            roots.len()
        );

        counter.advance(lines.len());
        forest.extend(roots);
    }

    assign_stack_ids(&mut forest);

    info!("Parsed {} call stacks", forest.len());
    forest
}

/// Tag every node with the index of its top-level root
pub fn assign_stack_ids(forest: &mut [TraceNode]) {
    for (stack_id, root) in forest.iter_mut().enumerate() {
        let mut pending: Vec<&mut TraceNode> = vec![root];

        while let Some(node) = pending.pop() {
            node.stack_id = Some(stack_id);
            pending.extend(node.children.iter_mut());
        }
    }
}
