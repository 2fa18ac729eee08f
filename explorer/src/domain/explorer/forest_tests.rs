//! Tests for span forest construction

use std::sync::Arc;

use super::*;
use crate::data::types::Span;

fn span(id: &str, parent: Option<&str>, start: &str) -> Span {
    Span {
        trace_id: "trace-1".to_string(),
        span_id: id.to_string(),
        parent_span_id: parent.map(str::to_string),
        name: format!("span {}", id),
        start_time: start.to_string(),
        ..Default::default()
    }
}

fn ts(second: u32) -> String {
    format!("2025-01-01T00:00:{:02}Z", second)
}

fn build(spans: Vec<Span>) -> SpanForest {
    SpanForest::build(Arc::from(spans))
}

/// All ids reachable from the roots, in pre-order
fn reachable(forest: &SpanForest) -> Vec<String> {
    fn walk(forest: &SpanForest, id: &str, out: &mut Vec<String>) {
        out.push(id.to_string());
        for child in forest.children(id) {
            walk(forest, child, out);
        }
    }
    let mut out = Vec::new();
    for root in forest.roots() {
        walk(forest, root, &mut out);
    }
    out
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_parent_with_two_children() {
    let forest = build(vec![
        span("A", None, &ts(0)),
        span("B", Some("A"), &ts(1)),
        span("C", Some("A"), &ts(2)),
    ]);

    assert_eq!(forest.roots(), ["A"]);
    assert_eq!(forest.children("A"), ["B", "C"]);
    assert!(forest.node("B").unwrap().child_ids.is_none());
    assert_eq!(forest.node("B").unwrap().parent_id.as_deref(), Some("A"));
}

#[test]
fn test_children_ordered_by_start_time_not_input() {
    let forest = build(vec![
        span("C", Some("A"), &ts(2)),
        span("B", Some("A"), &ts(1)),
        span("A", None, &ts(0)),
    ]);

    assert_eq!(forest.roots(), ["A"]);
    assert_eq!(forest.children("A"), ["B", "C"]);
}

#[test]
fn test_orphan_is_unreachable_but_indexed() {
    let forest = build(vec![span("X", Some("Z"), &ts(0))]);

    assert!(forest.roots().is_empty());
    assert_eq!(forest.len(), 1);
    assert_eq!(forest.span_of("X").unwrap().span_id, "X");
    assert_eq!(forest.orphan_ids(), ["X"]);
    assert!(reachable(&forest).is_empty());
}

#[test]
fn test_equal_start_times_keep_input_order() {
    let forest = build(vec![
        span("R", None, &ts(0)),
        span("second", Some("R"), &ts(5)),
        span("first", Some("R"), &ts(5)),
        span("third", Some("R"), &ts(5)),
    ]);

    assert_eq!(forest.children("R"), ["second", "first", "third"]);
}

#[test]
fn test_empty_input() {
    let forest = build(Vec::new());
    assert!(forest.is_empty());
    assert!(forest.roots().is_empty());
    assert!(forest.orphan_ids().is_empty());
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_empty_parent_string_is_root() {
    let forest = build(vec![span("A", Some(""), &ts(0))]);
    assert_eq!(forest.roots(), ["A"]);
    assert!(forest.node("A").unwrap().parent_id.is_none());
}

#[test]
fn test_multiple_roots_sorted() {
    let forest = build(vec![
        span("late", None, &ts(9)),
        span("early", None, &ts(1)),
    ]);
    assert_eq!(forest.roots(), ["early", "late"]);
}

#[test]
fn test_unparsable_timestamps_sort_first_and_stable() {
    let forest = build(vec![
        span("R", None, &ts(0)),
        span("valid", Some("R"), &ts(3)),
        span("bad1", Some("R"), "yesterday"),
        span("bad2", Some("R"), ""),
    ]);

    assert_eq!(forest.children("R"), ["bad1", "bad2", "valid"]);
}

#[test]
fn test_self_parent_is_not_a_root() {
    let forest = build(vec![span("A", Some("A"), &ts(0))]);

    assert!(forest.roots().is_empty());
    assert_eq!(forest.children("A"), ["A"]);
    assert!(forest.orphan_ids().is_empty());
}

#[test]
fn test_duplicate_ids_last_write_wins() {
    let mut second = span("A", None, &ts(1));
    second.name = "replacement".to_string();
    let forest = build(vec![span("A", None, &ts(0)), second]);

    assert_eq!(forest.len(), 1);
    assert_eq!(forest.span_of("A").unwrap().name, "replacement");
    // Both records were roots when grouped
    assert_eq!(forest.roots(), ["A", "A"]);
}

#[test]
fn test_promote_orphans_option() {
    let spans: Arc<[Span]> = Arc::from(vec![
        span("R", None, &ts(2)),
        span("O", Some("missing"), &ts(1)),
        span("C", Some("R"), &ts(3)),
    ]);
    let forest = SpanForest::build_with(
        spans,
        ForestOptions {
            promote_orphans: true,
        },
    );

    assert_eq!(forest.roots(), ["O", "R"]);
    assert_eq!(forest.orphan_ids(), ["O"]);
    assert_eq!(reachable(&forest), ["O", "R", "C"]);
}

#[test]
fn test_span_back_reference() {
    let spans: Arc<[Span]> = Arc::from(vec![span("A", None, &ts(0))]);
    let forest = SpanForest::build(spans.clone());
    assert!(Arc::ptr_eq(forest.spans(), &spans));
    let node = forest.node("A").unwrap();
    assert_eq!(forest.span(node).name, "span A");
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn sample() -> Vec<Span> {
    vec![
        span("root", None, &ts(0)),
        span("llm-1", Some("root"), &ts(2)),
        span("tool-1", Some("llm-1"), &ts(3)),
        span("llm-2", Some("root"), &ts(4)),
        span("tool-2", Some("llm-2"), &ts(6)),
        span("tool-3", Some("llm-2"), &ts(5)),
        span("second-root", None, &ts(1)),
        span("orphan", Some("gone"), &ts(7)),
    ]
}

#[test]
fn test_idempotent_under_input_permutation() {
    let a = build(sample());
    let mut reversed = sample();
    reversed.reverse();
    let b = build(reversed);

    assert_eq!(a.roots(), b.roots());
    for node in a.nodes() {
        assert_eq!(node.child_ids, b.node(&node.id).unwrap().child_ids);
    }
}

#[test]
fn test_every_root_span_listed_once() {
    let forest = build(sample());
    for s in sample().iter().filter(|s| s.is_root()) {
        let count = forest.roots().iter().filter(|r| **r == s.span_id).count();
        assert_eq!(count, 1, "root {} should appear once", s.span_id);
    }
}

#[test]
fn test_reachability() {
    let forest = build(sample());
    let seen = reachable(&forest);

    for s in sample() {
        let occurrences = seen.iter().filter(|id| **id == s.span_id).count();
        if s.span_id == "orphan" {
            assert_eq!(occurrences, 0);
        } else {
            assert_eq!(occurrences, 1, "{} should be reachable once", s.span_id);
        }
    }
}

#[test]
fn test_siblings_non_decreasing_start() {
    let forest = build(sample());
    for node in forest.nodes() {
        let starts: Vec<i64> = node
            .child_ids()
            .iter()
            .map(|id| timestamp_sort_key(&forest.span_of(id).unwrap().start_time))
            .collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }
    assert_eq!(forest.children("llm-2"), ["tool-3", "tool-2"]);
}
