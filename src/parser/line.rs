//! Classification of single trace lines.
//!
//! A forge trace line looks like:
//!
//! ```text
//!     │   ├─ [2603] Token::balanceOf(0xBEEF) [staticcall]
//! ```
//!
//! The box-drawing prefix gives the depth, the rest is the content from
//! which contract, function, call type and return markers are read.

use super::schema::{CallType, TraceNode};
use crate::utils::config::INDENT_GLYPHS;
use regex::Regex;
use std::sync::OnceLock;

/// Result of classifying one non-blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub depth: usize,
    pub content: String,
    pub contract_name: Option<String>,
    pub function_name: Option<String>,
    pub call_type: Option<CallType>,
    pub is_return: bool,
    pub is_event: bool,
    pub gas: Option<u64>,
}

impl ClassifiedLine {
    /// Turn the classification into an unlinked tree node
    pub fn into_node(self, id: String) -> TraceNode {
        TraceNode {
            id,
            raw: self.content.clone(),
            content: self.content,
            depth: self.depth,
            contract_name: self.contract_name,
            function_name: self.function_name,
            call_type: self.call_type,
            is_return: self.is_return,
            is_event: self.is_event,
            gas: self.gas,
            parent: None,
            stack_id: None,
            children: Vec::new(),
        }
    }
}

fn indent_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let glyphs: String = INDENT_GLYPHS
            .iter()
            .map(|glyph| regex::escape(&glyph.to_string()))
            .collect();
        Regex::new(&format!(r"^\s*(?:[{}]─?\s*)*", glyphs)).unwrap()
    })
}

// Identifiers are ASCII; `\w` would also accept Unicode letters.
fn call_signature_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z0-9_]+)::([A-Za-z0-9_]+)\(.*?\)").unwrap())
}

fn gas_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[(\d+)\]").unwrap())
}

/// Classify one raw line
///
/// **Public** - used by the tree builder for every line of a section
///
/// # Returns
/// `None` when the line is blank once its indentation prefix is removed
pub fn classify_line(line: &str) -> Option<ClassifiedLine> {
    let prefix = indent_prefix_regex().find(line)?;

    let depth = prefix
        .as_str()
        .chars()
        .filter(|c| INDENT_GLYPHS.contains(c))
        .count();

    let content = line[prefix.end()..].trim();
    if content.is_empty() {
        return None;
    }

    let (contract_name, function_name) = extract_call_signature(content);

    Some(ClassifiedLine {
        depth,
        content: content.to_string(),
        contract_name,
        function_name,
        call_type: detect_call_type(content),
        is_return: is_return_line(content),
        is_event: content.contains("emit "),
        gas: extract_gas(content),
    })
}

/// First `Contract::function(...)` occurrence in the content
pub fn extract_call_signature(content: &str) -> (Option<String>, Option<String>) {
    match call_signature_regex().captures(content) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().to_string()),
            caps.get(2).map(|m| m.as_str().to_string()),
        ),
        None => (None, None),
    }
}

/// Call type marker, checked in `CallType::DETECTION_ORDER`
pub fn detect_call_type(content: &str) -> Option<CallType> {
    CallType::DETECTION_ORDER
        .into_iter()
        .find(|call_type| content.contains(call_type.marker()))
}

pub fn is_return_line(content: &str) -> bool {
    content.contains("← [Return]") || content.contains("← [Stop]")
}

/// Gas column at the start of call lines, e.g. `[24523] Counter::increment()`
pub fn extract_gas(content: &str) -> Option<u64> {
    gas_regex()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
