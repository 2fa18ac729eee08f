//! Explorer session: the stateful owner of one span tree view
//!
//! Holds the span collection reference, the memoized forest, the expansion
//! state and the externally selected span id. The forest is rebuilt only
//! when a different collection (by reference) is supplied; expansion state
//! survives rebuilds and is reset only by creating a new session.

use std::sync::Arc;

use super::forest::{ForestOptions, SpanForest};
use super::render::{RenderOptions, TreeRenderer};
use super::traversal::{ExpansionState, VisitRecord, visit, visit_subtree};
use crate::data::types::Span;

/// Receives selection requests when a node is activated
pub trait SpanClickHandler {
    fn on_span_click(&mut self, span: &Span);
}

impl<F> SpanClickHandler for F
where
    F: FnMut(&Span),
{
    fn on_span_click(&mut self, span: &Span) {
        self(span)
    }
}

pub struct ExplorerSession<H: SpanClickHandler> {
    forest: Arc<SpanForest>,
    options: ForestOptions,
    expansion: ExpansionState,
    selected_span_id: Option<String>,
    on_span_click: H,
}

impl<H: SpanClickHandler> ExplorerSession<H> {
    pub fn new(spans: Arc<[Span]>, on_span_click: H) -> Self {
        Self::with_options(spans, ForestOptions::default(), on_span_click)
    }

    pub fn with_options(spans: Arc<[Span]>, options: ForestOptions, on_span_click: H) -> Self {
        let expansion = ExpansionState::all_expanded(&spans);
        let forest = Arc::new(SpanForest::build_with(spans, options));
        Self {
            forest,
            options,
            expansion,
            selected_span_id: None,
            on_span_click,
        }
    }

    /// Supply a (possibly new) span collection.
    ///
    /// Returns `true` when the forest was rebuilt.
    pub fn set_spans(&mut self, spans: Arc<[Span]>) -> bool {
        if Arc::ptr_eq(self.forest.spans(), &spans) {
            tracing::trace!("Span collection unchanged, reusing forest");
            return false;
        }
        self.forest = Arc::new(SpanForest::build_with(spans, self.options));
        true
    }

    pub fn forest(&self) -> &Arc<SpanForest> {
        &self.forest
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn selected_span_id(&self) -> Option<&str> {
        self.selected_span_id.as_deref()
    }

    /// Selection is owned by the caller; it does not touch expansion or the forest
    pub fn set_selected_span_id(&mut self, id: Option<String>) {
        self.selected_span_id = id;
    }

    /// Flip a node's expansion. Leaves and unknown ids cannot be toggled.
    pub fn toggle(&mut self, id: &str) -> bool {
        let expanded = self.expansion.is_expanded(id);
        self.set_expanded(id, !expanded)
    }

    /// Set a node's expansion; `false` when the node has no children
    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> bool {
        match self.forest.node(id) {
            Some(node) if node.has_children() => {
                self.expansion = self.expansion.with(id, expanded);
                true
            }
            Some(_) => {
                tracing::debug!(id, "Leaf span cannot be expanded or collapsed");
                false
            }
            None => {
                tracing::debug!(id, "Unknown span id");
                false
            }
        }
    }

    /// Emit a selection request for `id`
    pub fn activate(&mut self, id: &str) -> Option<&Span> {
        let span = self.forest.span_of(id)?;
        self.on_span_click.on_span_click(span);
        Some(span)
    }

    pub fn visits(&self) -> Vec<VisitRecord> {
        visit(&self.forest, &self.expansion)
    }

    /// Visits restricted to the subtree under `id`
    pub fn visits_from(&self, id: &str) -> Vec<VisitRecord> {
        visit_subtree(&self.forest, &self.expansion, id)
    }

    /// Render the whole forest, or only the subtree under `focus`
    pub fn render(&self, options: RenderOptions, focus: Option<&str>) -> String {
        let records = match focus {
            Some(id) => self.visits_from(id),
            None => self.visits(),
        };
        TreeRenderer::new(&self.forest, options).render(&records, self.selected_span_id())
    }
}
