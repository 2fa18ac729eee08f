//! Raw tab: identifiers, timing and the untouched attribute bags

use super::PanelText;
use crate::core::constants::EMPTY_CELL;
use crate::data::types::{Span, map_to_json};
use crate::utils::format::format_duration;
use crate::utils::json::pretty_json;

pub(super) fn write_raw(out: &mut PanelText<'_>, span: &Span) {
    let or_empty = |s: &str| {
        if s.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            s.to_string()
        }
    };

    out.heading("Basic Info");
    out.line(1, &format!("Trace ID: {}", or_empty(&span.trace_id)));
    out.line(1, &format!("Span ID: {}", or_empty(&span.span_id)));
    out.line(
        1,
        &format!("Parent Span ID: {}", or_empty(span.parent_id().unwrap_or_default())),
    );
    out.line(1, &format!("Name: {}", or_empty(&span.name)));
    out.line(1, &format!("Service: {}", or_empty(&span.service)));
    out.line(
        1,
        &format!("Kind: {}", or_empty(span.kind.as_deref().unwrap_or_default())),
    );
    out.line(
        1,
        &format!("Status: {}", or_empty(span.status.as_deref().unwrap_or_default())),
    );

    out.blank();
    out.heading("Timing");
    out.line(1, &format!("Start Time: {}", or_empty(&span.start_time)));
    out.line(1, &format!("End Time: {}", or_empty(&span.end_time)));
    out.line(
        1,
        &format!("Duration: {}", format_duration(span.duration_in_nanos)),
    );

    if let Some(attributes) = span.attributes.as_ref().filter(|a| !a.is_empty()) {
        out.blank();
        out.heading("Attributes");
        for (key, value) in attributes {
            out.line(1, &format!("{}: {}", key, value));
        }
    }

    if let Some(resource) = span.resource.as_ref().filter(|r| !r.is_empty()) {
        out.blank();
        out.heading("Resource Attributes");
        out.block(1, &pretty_json(&map_to_json(resource)));
    }

    if let Some(amp) = &span.amp_attributes {
        out.blank();
        out.heading("AMP Attributes");
        match serde_json::to_value(amp) {
            Ok(value) => out.block(1, &pretty_json(&value)),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize AMP attributes"),
        }
    }
}
