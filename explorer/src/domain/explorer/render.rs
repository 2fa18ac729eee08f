//! Text rendering of visit sequences
//!
//! Each visit record becomes one line: connector guides derived from the
//! ancestors' last-child flags, a toggle glyph, the kind badge, span name,
//! duration, error badge, span id and selected attribute chips.

use super::forest::SpanForest;
use super::palette::{Palette, TreeGuides};
use super::traversal::VisitRecord;
use crate::core::constants::TREE_ATTRIBUTE_CHIPS;
use crate::data::types::Span;
use crate::utils::format::format_duration;

/// Marker column for the selected row
const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub guides: TreeGuides,
    pub palette: Palette,
    pub show_attributes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            guides: TreeGuides::default(),
            palette: Palette::PLAIN,
            show_attributes: true,
        }
    }
}

pub struct TreeRenderer<'a> {
    forest: &'a SpanForest,
    options: RenderOptions,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(forest: &'a SpanForest, options: RenderOptions) -> Self {
        Self { forest, options }
    }

    /// Render records (pre-order, as produced by traversal) to lines
    pub fn render_lines(&self, records: &[VisitRecord], selected: Option<&str>) -> Vec<String> {
        // is_last flags of the non-root ancestors of the current record
        let mut lineage: Vec<bool> = Vec::new();
        let mut lines = Vec::with_capacity(records.len());

        for record in records {
            let Some(span) = self.forest.span_of(&record.id) else {
                continue;
            };
            lineage.truncate(record.depth.saturating_sub(1));
            let prefix = self.prefix(&lineage, record);
            let is_selected = selected == Some(record.id.as_str());
            lines.push(self.line(span, record, &prefix, is_selected));

            if record.depth > 0 {
                lineage.push(record.is_last);
            }
        }
        lines
    }

    pub fn render(&self, records: &[VisitRecord], selected: Option<&str>) -> String {
        let mut out = self.render_lines(records, selected).join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn prefix(&self, lineage: &[bool], record: &VisitRecord) -> String {
        let guides = self.options.guides;
        let mut prefix = String::new();
        for &ancestor_last in lineage {
            prefix.push_str(if ancestor_last {
                guides.space()
            } else {
                guides.vertical()
            });
        }
        if record.depth > 0 {
            prefix.push_str(if record.is_last {
                guides.last()
            } else {
                guides.branch()
            });
        }
        prefix
    }

    fn line(&self, span: &Span, record: &VisitRecord, prefix: &str, selected: bool) -> String {
        let palette = &self.options.palette;
        let (open, closed, leaf) = self.options.guides.toggles();
        let toggle = match (record.has_children, record.expanded) {
            (false, _) => leaf,
            (true, true) => open,
            (true, false) => closed,
        };

        let mut label = String::new();
        if let Some(badge) = span.amp_kind().badge() {
            label.push_str(&format!("[{}] ", badge));
        }
        label.push_str(&span.name);
        let label = if selected {
            palette.paint(palette.selected, &label)
        } else {
            label
        };

        let mut line = format!(
            "{}{}{} {}  ({})",
            if selected {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            },
            palette.paint(palette.connector, prefix),
            toggle,
            label,
            format_duration(span.duration_in_nanos),
        );
        if span.has_error_status() {
            line.push_str("  ");
            line.push_str(&palette.paint(palette.error, "[Error]"));
        }
        line.push_str("  ");
        line.push_str(&palette.paint(palette.muted, &span.span_id));

        if self.options.show_attributes {
            for chip in attribute_chips(span) {
                line.push_str("  ");
                line.push_str(&chip);
            }
        }
        line
    }
}

/// `label=value` chips for the well-known GenAI attributes present on a span
pub fn attribute_chips(span: &Span) -> Vec<String> {
    TREE_ATTRIBUTE_CHIPS
        .iter()
        .filter_map(|(key, label)| {
            span.attribute(key)
                .filter(|value| value.is_truthy())
                .map(|value| format!("{}={}", label, value))
        })
        .collect()
}
