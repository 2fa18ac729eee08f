//! Span forest construction
//!
//! Turns a flat, unordered span list into an arena of nodes keyed by span id.
//! Links between nodes are ids, never references, so cyclic or duplicated
//! input cannot create ownership cycles; traversal guards against them.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::data::types::Span;
use crate::utils::time::timestamp_sort_key;

/// Forest construction options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestOptions {
    /// List spans whose parent is missing from the input as extra roots.
    ///
    /// Off by default: such spans stay in the node map but are unreachable.
    pub promote_orphans: bool,
}

/// A span's position in the forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestNode {
    /// Index of the source span in the forest's span slice
    index: usize,
    pub id: String,
    pub parent_id: Option<String>,
    /// Child ids in ascending start time; `None` for leaves
    pub child_ids: Option<Vec<String>>,
}

impl ForestNode {
    pub fn child_ids(&self) -> &[String] {
        self.child_ids.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.child_ids().is_empty()
    }
}

/// Immutable forest derived from one span collection
#[derive(Debug, Clone)]
pub struct SpanForest {
    spans: Arc<[Span]>,
    nodes: FxHashMap<String, ForestNode>,
    roots: Vec<String>,
    orphans: Vec<String>,
}

impl SpanForest {
    /// Build with default options
    pub fn build(spans: Arc<[Span]>) -> Self {
        Self::build_with(spans, ForestOptions::default())
    }

    pub fn build_with(spans: Arc<[Span]>, options: ForestOptions) -> Self {
        // Stable: equal start times keep input order
        let mut order: Vec<usize> = (0..spans.len()).collect();
        order.sort_by_cached_key(|&i| timestamp_sort_key(&spans[i].start_time));

        let known_ids: FxHashSet<&str> = spans.iter().map(|s| s.span_id.as_str()).collect();

        // First pass: group children under parents, collect roots
        let mut children: FxHashMap<&str, Vec<String>> = FxHashMap::default();
        let mut roots = Vec::new();
        let mut orphans = Vec::new();

        for &i in &order {
            let span = &spans[i];
            match span.parent_id() {
                Some(parent) => {
                    children
                        .entry(parent)
                        .or_default()
                        .push(span.span_id.clone());
                    if !known_ids.contains(parent) {
                        orphans.push(span.span_id.clone());
                        if options.promote_orphans {
                            roots.push(span.span_id.clone());
                        }
                    }
                }
                None => roots.push(span.span_id.clone()),
            }
        }

        // Second pass: one node per span; duplicate ids keep the last span
        let mut nodes = FxHashMap::with_capacity_and_hasher(spans.len(), Default::default());
        for &i in &order {
            let span = &spans[i];
            nodes.insert(
                span.span_id.clone(),
                ForestNode {
                    index: i,
                    id: span.span_id.clone(),
                    parent_id: span.parent_id().map(str::to_string),
                    child_ids: children.get(span.span_id.as_str()).cloned(),
                },
            );
        }

        if !orphans.is_empty() {
            tracing::debug!(
                orphans = orphans.len(),
                promoted = options.promote_orphans,
                "Spans reference parents missing from the trace"
            );
        }
        tracing::debug!(
            spans = spans.len(),
            nodes = nodes.len(),
            roots = roots.len(),
            "Built span forest"
        );

        Self {
            spans,
            nodes,
            roots,
            orphans,
        }
    }

    /// Root ids in ascending start time
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn node(&self, id: &str) -> Option<&ForestNode> {
        self.nodes.get(id)
    }

    /// Source span of a node
    pub fn span(&self, node: &ForestNode) -> &Span {
        &self.spans[node.index]
    }

    pub fn span_of(&self, id: &str) -> Option<&Span> {
        self.node(id).map(|node| self.span(node))
    }

    /// Child ids of a node; empty for leaves and unknown ids
    pub fn children(&self, id: &str) -> &[String] {
        self.node(id).map(ForestNode::child_ids).unwrap_or_default()
    }

    /// Ids of spans whose parent id is not present in the input
    pub fn orphan_ids(&self) -> &[String] {
        &self.orphans
    }

    /// The span collection this forest was built from
    pub fn spans(&self) -> &Arc<[Span]> {
        &self.spans
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ForestNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
#[path = "forest_tests.rs"]
mod tests;
