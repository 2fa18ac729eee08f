//! Trace list table rendering

use super::query::TraceSelection;
use super::row::{DurationSeverity, TraceRow};
use crate::core::constants::{DEFAULT_PREVIEW_CHARS, EMPTY_CELL};
use crate::domain::explorer::Palette;
use crate::utils::string::{fit_width, truncate_preview};
use crate::utils::time::format_display_time;

const COLUMN_GAP: &str = "  ";

const HEADERS: [&str; 10] = [
    "TRACE ID",
    "NAME",
    "KIND",
    "STATUS",
    "INPUT",
    "OUTPUT",
    "START TIME",
    "DURATION",
    "TOKENS",
    "SPANS",
];

#[derive(Debug, Clone, Copy)]
pub struct TraceTableOptions {
    /// Input/output preview width before `...`
    pub preview_chars: usize,
    pub palette: Palette,
}

impl Default for TraceTableOptions {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
            palette: Palette::PLAIN,
        }
    }
}

/// Display text of each column for one row, in header order
pub fn row_cells(row: &TraceRow, preview_chars: usize) -> [String; 10] {
    let preview = |text: Option<&str>| match text.filter(|t| !t.is_empty()) {
        Some(t) => truncate_preview(&t.replace(['\n', '\r'], " "), preview_chars),
        None => EMPTY_CELL.to_string(),
    };
    [
        row.trace_id.clone(),
        row.root_span_name.clone(),
        row.root_span_kind.clone(),
        row.status_label().to_string(),
        preview(row.input.as_deref()),
        preview(row.output.as_deref()),
        format_display_time(&row.start_time),
        format!("{:.2}s", row.duration_in_seconds),
        row.token_usage
            .map(|usage| usage.total_tokens.to_string())
            .unwrap_or_else(|| EMPTY_CELL.to_string()),
        row.span_count.to_string(),
    ]
}

pub fn render_trace_table(selection: &TraceSelection, options: &TraceTableOptions) -> String {
    let palette = &options.palette;
    let mut lines = Vec::new();

    if selection.rows.is_empty() {
        lines.push(if selection.search_active {
            "No matching traces found".to_string()
        } else {
            "No traces found".to_string()
        });
    } else {
        let cells: Vec<[String; 10]> = selection
            .rows
            .iter()
            .map(|row| row_cells(row, options.preview_chars))
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| fit_width(h, w))
            .collect();
        lines.push(palette.paint(palette.heading, header.join(COLUMN_GAP).trim_end()));

        for (row, cells) in selection.rows.iter().zip(&cells) {
            let fitted: Vec<String> = cells
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(col, (cell, w))| {
                    let text = fit_width(cell, w);
                    match col {
                        3 => palette.paint(status_token(palette, row), &text),
                        7 => palette.paint(severity_token(palette, row.severity()), &text),
                        _ => text,
                    }
                })
                .collect();
            lines.push(fitted.join(COLUMN_GAP).trim_end().to_string());
        }
    }

    if selection.search_active {
        lines.push(String::new());
        lines.push(format!(
            "{} of {} traces",
            selection.matched, selection.total
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn status_token<'p>(palette: &'p Palette, row: &TraceRow) -> &'p str {
    if row.has_errors() {
        palette.error
    } else {
        palette.success
    }
}

fn severity_token(palette: &Palette, severity: DurationSeverity) -> &str {
    match severity {
        DurationSeverity::Fast => palette.success,
        DurationSeverity::Slow => palette.warning,
        DurationSeverity::Critical => palette.error,
    }
}
