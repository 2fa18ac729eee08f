//! Depth-first traversal with per-node expansion state

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use super::forest::SpanForest;
use crate::data::types::Span;

/// Expanded/collapsed flag per node id.
///
/// Values are never mutated in place: [`ExpansionState::toggled`] returns a
/// new state sharing nothing with the old one, so a reader holding the
/// previous state never observes a half-applied change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: Arc<FxHashMap<String, bool>>,
}

impl ExpansionState {
    /// Every span in `spans` starts expanded
    pub fn all_expanded(spans: &[Span]) -> Self {
        let expanded = spans
            .iter()
            .map(|span| (span.span_id.clone(), true))
            .collect();
        Self {
            expanded: Arc::new(expanded),
        }
    }

    /// Ids absent from the state (spans that arrived after load) read as collapsed
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// New state with `id` flipped
    pub fn toggled(&self, id: &str) -> Self {
        self.with(id, !self.is_expanded(id))
    }

    /// New state with `id` set to `expanded`
    pub fn with(&self, id: &str, expanded: bool) -> Self {
        let mut next = FxHashMap::clone(&self.expanded);
        next.insert(id.to_string(), expanded);
        Self {
            expanded: Arc::new(next),
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

/// One emitted row of the depth-first walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub id: String,
    /// 0 for the node the walk started from
    pub depth: usize,
    /// Last among its siblings (roots: last among roots)
    pub is_last: bool,
    pub is_root: bool,
    pub has_children: bool,
    pub expanded: bool,
}

/// Walk every root in order, descending only into expanded nodes
pub fn visit(forest: &SpanForest, state: &ExpansionState) -> Vec<VisitRecord> {
    let mut out = Vec::with_capacity(forest.len());
    let roots = forest.roots();
    for (i, root) in roots.iter().enumerate() {
        walk(forest, state, root, i + 1 == roots.len(), &mut out);
    }
    out
}

/// Walk the subtree under `id`, which is reported as a root at depth 0
pub fn visit_subtree(forest: &SpanForest, state: &ExpansionState, id: &str) -> Vec<VisitRecord> {
    let mut out = Vec::new();
    walk(forest, state, id, true, &mut out);
    out
}

/// A node on the current path whose children are still being emitted
struct Frame<'f> {
    id: &'f str,
    depth: usize,
    /// Empty when the node is collapsed
    children: &'f [String],
    next_child: usize,
}

/// Pre-order walk from one root with an explicit frame stack.
///
/// Ids on the stack form the current path; a child already on it is a cycle
/// and is skipped. Depth is bounded by memory, not by the call stack.
fn walk<'f>(
    forest: &'f SpanForest,
    state: &ExpansionState,
    root: &str,
    root_is_last: bool,
    out: &mut Vec<VisitRecord>,
) {
    let mut path: FxHashSet<&'f str> = FxHashSet::default();
    let mut stack: Vec<Frame<'f>> = Vec::new();
    enter(forest, state, root, 0, root_is_last, true, &mut path, &mut stack, out);

    loop {
        let next = match stack.last_mut() {
            None => break,
            Some(frame) => {
                let children = frame.children;
                children.get(frame.next_child).map(|child| {
                    frame.next_child += 1;
                    let is_last = frame.next_child == children.len();
                    (child.as_str(), frame.depth + 1, is_last)
                })
            }
        };
        match next {
            Some((child, depth, is_last)) => {
                enter(forest, state, child, depth, is_last, false, &mut path, &mut stack, out);
            }
            None => {
                if let Some(frame) = stack.pop() {
                    path.remove(frame.id);
                }
            }
        }
    }
}

/// Emit the record for `id` and push its frame
#[allow(clippy::too_many_arguments)]
fn enter<'f>(
    forest: &'f SpanForest,
    state: &ExpansionState,
    id: &str,
    depth: usize,
    is_last: bool,
    is_root: bool,
    path: &mut FxHashSet<&'f str>,
    stack: &mut Vec<Frame<'f>>,
    out: &mut Vec<VisitRecord>,
) {
    let Some(node) = forest.node(id) else {
        return;
    };
    if !path.insert(node.id.as_str()) {
        tracing::trace!(id, depth, "Cycle in span parents, branch truncated");
        return;
    }

    let children = node.child_ids();
    let expanded = state.is_expanded(id);
    out.push(VisitRecord {
        id: node.id.clone(),
        depth,
        is_last,
        is_root,
        has_children: !children.is_empty(),
        expanded,
    });

    stack.push(Frame {
        id: node.id.as_str(),
        depth,
        children: if expanded { children } else { &[] },
        next_child: 0,
    });
}
