//! Panel header: span name plus a row of metric chips

use super::PanelText;
use crate::data::types::Span;
use crate::utils::format::{format_count, format_millis};

/// Metric chips in display order: status, kind, duration, model,
/// temperature, token usage
pub fn header_chips(span: &Span) -> Vec<String> {
    let amp = span.amp_attributes.as_ref();
    let mut chips = Vec::new();

    if let Some(status) = amp.and_then(|a| a.status.as_ref()) {
        chips.push(if status.error {
            format!(
                "[Error: {}]",
                status.error_type.as_deref().unwrap_or("Unknown")
            )
        } else {
            "[Success]".to_string()
        });
    }
    if let Some(amp) = amp {
        chips.push(amp.kind.as_str().to_uppercase());
    }
    chips.push(format_millis(span.duration_in_nanos));

    if let Some(model) = amp.and_then(|a| a.model.as_deref()) {
        chips.push(model.to_string());
    }
    if let Some(temperature) = amp.and_then(|a| a.temperature) {
        chips.push(format!("temp {}", temperature));
    }
    if let Some(usage) = amp.and_then(|a| a.token_usage.as_ref()) {
        let mut breakdown = format!(
            "input {}, output {}",
            format_count(usage.input_tokens),
            format_count(usage.output_tokens)
        );
        if let Some(cache) = usage.cache_read_input_tokens.filter(|c| *c > 0) {
            breakdown.push_str(&format!(", cache {}", format_count(cache)));
        }
        chips.push(format!(
            "tokens {} ({})",
            format_count(usage.total_tokens),
            breakdown
        ));
    }
    chips
}

pub(super) fn write_header(out: &mut PanelText<'_>, span: &Span) {
    out.heading(&span.name);

    let palette = *out.palette();
    let error = span
        .amp_attributes
        .as_ref()
        .and_then(|a| a.status.as_ref())
        .map(|s| s.error);
    let chips: Vec<String> = header_chips(span)
        .into_iter()
        .enumerate()
        .map(|(i, chip)| match (i, error) {
            (0, Some(true)) => palette.paint(palette.error, &chip),
            (0, Some(false)) => palette.paint(palette.success, &chip),
            _ => chip,
        })
        .collect();
    out.line(0, &chips.join("  "));
}
