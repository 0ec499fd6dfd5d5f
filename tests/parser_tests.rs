use forge_trace_studio::parser::{
    build_section, classify_line, parse_document, split_sections, CallType, TraceNode,
};
use forge_trace_studio::query::flatten;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

const COUNTER_TRACE: &str = include_str!("fixtures/counter.trace");

/// Shape and metadata of a forest, without ids
fn shape(forest: &[TraceNode]) -> Vec<(usize, String, Option<CallType>, bool, Option<usize>)> {
    flatten(forest)
        .map(|n| (n.depth, n.content.clone(), n.call_type, n.is_return, n.stack_id))
        .collect()
}

#[test]
fn test_single_call_with_return() {
    let forest = parse_document("Traces:\nA::b(1,2)\n  └─ ← [Return]");

    assert_eq!(forest.len(), 1);
    let root = &forest[0];
    assert_eq!(root.contract_name.as_deref(), Some("A"));
    assert_eq!(root.function_name.as_deref(), Some("b"));
    assert_eq!(root.depth, 0);
    assert_eq!(root.children.len(), 1);

    let child = &root.children[0];
    assert!(child.is_return);
    assert_eq!(child.depth, 1);
    assert_eq!(child.parent.as_deref(), Some(root.id.as_str()));
}

#[test]
fn test_two_sections_get_consecutive_stack_ids() {
    let forest = parse_document("Traces:\nA::a()\nTraces:\nB::b()\n");

    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].stack_id, Some(0));
    assert_eq!(forest[1].stack_id, Some(1));
    assert_ne!(forest[0].id, forest[1].id);
}

#[test]
fn test_skipped_levels_attach_to_root() {
    let forest = parse_document("Traces:\nRoot::r()\n│ │ └─ Deep::d()\n");

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].children.len(), 1);
    let deep = &forest[0].children[0];
    assert_eq!(deep.depth, 3);
    assert!(deep.children.is_empty());
}

#[test]
fn test_nested_parentheses_and_hex_arguments() {
    let line = classify_line("Contract::run(0xabc123, emit Foo)").unwrap();

    assert_eq!(line.contract_name.as_deref(), Some("Contract"));
    assert_eq!(line.function_name.as_deref(), Some("run"));
    assert!(!line.is_return);
}

#[test]
fn test_only_first_signature_is_used() {
    let line = classify_line("Router::swap(Pair::getReserves())").unwrap();
    assert_eq!(line.contract_name.as_deref(), Some("Router"));
    assert_eq!(line.function_name.as_deref(), Some("swap"));
}

#[test]
fn test_ids_are_unique_across_sections() {
    let forest = parse_document(COUNTER_TRACE);

    let ids: Vec<&str> = flatten(&forest).map(|n| n.id.as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn test_forge_output_structure() {
    let forest = parse_document(COUNTER_TRACE);

    // Preamble and [PASS] lines outside trace bodies become roots of their own
    assert_eq!(forest.len(), 7);
    assert_eq!(forest[0].content, "Compiling 1 files with Solc 0.8.24");

    let increment = &forest[3];
    assert_eq!(increment.id, "line-3");
    assert_eq!(increment.gas, Some(31303));
    assert_eq!(increment.qualified_name().as_deref(), Some("CounterTest::test_Increment"));
    assert_eq!(increment.children.len(), 3);
    assert_eq!(increment.children[1].call_type, Some(CallType::StaticCall));
    assert_eq!(increment.children[1].children[0].content, "← [Return] 1");

    let fuzz = &forest[5];
    assert_eq!(fuzz.id, "line-11");
    let proxy = &fuzz.children[1];
    assert_eq!(proxy.call_type, Some(CallType::DelegateCall));
    assert_eq!(proxy.children[0].children[0].depth, 3);
    assert!(fuzz.children[0].children[0].is_event);

    for (index, root) in forest.iter().enumerate() {
        assert!(flatten(std::slice::from_ref(root)).all(|n| n.stack_id == Some(index)));
    }
}

#[test]
fn test_depth_independent_of_whitespace() {
    let tight = parse_document("Traces:\nA::a()\n├─B::b()\n│└─C::c()\n");
    let loose = parse_document("Traces:\nA::a()\n   ├─     B::b()\n   │      └─   C::c()\n");

    assert_eq!(shape(&tight), shape(&loose));
}

#[test]
fn test_parsing_is_idempotent() {
    let first = parse_document(COUNTER_TRACE);
    let second = parse_document(COUNTER_TRACE);
    assert_eq!(first, second);
}

#[test]
fn test_id_offset_only_changes_ids() {
    let lines = ["A::a()", "├─ B::b()", "│  └─ ← [Stop]"];
    let base = build_section(&lines, 0);
    let shifted = build_section(&lines, 100);

    assert_eq!(shifted[0].id, "line-100");
    assert_eq!(
        shape(&base).into_iter().map(|s| (s.0, s.1)).collect::<Vec<_>>(),
        shape(&shifted).into_iter().map(|s| (s.0, s.1)).collect::<Vec<_>>()
    );
}

#[test]
fn test_blank_lines_produce_no_nodes() {
    let forest = parse_document("Traces:\nA::a()\n\n   \n│  \n├─ B::b()\n");

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].children.len(), 1);
    assert_eq!(flatten(&forest).count(), 2);
}

#[test]
fn test_empty_document() {
    assert!(parse_document("").is_empty());
    assert!(parse_document("Traces:\n\nTraces:   ").is_empty());
    assert!(split_sections("Traces:Traces:").is_empty());
}

#[test]
fn test_orphan_lines_are_dropped() {
    let forest = parse_document("Traces:\n├─ Lost::x()\n│  └─ ← [Stop]\n");
    assert!(forest.is_empty());
}
