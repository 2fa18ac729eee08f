//! Overview tab: agent name, input and output

use super::PanelText;
use crate::data::types::{AmpContent, PromptMessage, Span};
use crate::utils::json::pretty_json_string;

pub(super) fn write_overview(out: &mut PanelText<'_>, span: &Span) {
    let amp = span.amp_attributes.as_ref();
    let name = amp.and_then(|a| a.name.as_deref()).filter(|n| !n.is_empty());
    let input = amp.and_then(|a| a.input.as_ref()).filter(|c| !c.is_empty());
    let output = amp.and_then(|a| a.output.as_ref()).filter(|c| !c.is_empty());

    if name.is_none() && input.is_none() && output.is_none() {
        out.line(0, "No data available");
        return;
    }

    let mut first = true;
    if let Some(name) = name {
        out.heading("Name");
        out.line(1, name);
        first = false;
    }
    for (title, content) in [("Input", input), ("Output", output)] {
        if let Some(content) = content {
            if !first {
                out.blank();
            }
            write_content(out, title, content);
            first = false;
        }
    }
}

fn write_content(out: &mut PanelText<'_>, title: &str, content: &AmpContent) {
    out.heading(title);
    match content {
        AmpContent::Text(text) => out.block(1, text),
        AmpContent::Messages(messages) => {
            for (i, message) in messages.iter().enumerate() {
                write_message(out, message, i + 1, messages.len());
            }
        }
    }
}

fn write_message(out: &mut PanelText<'_>, message: &PromptMessage, n: usize, total: usize) {
    out.line(
        1,
        &format!(
            "[{}] Message {} of {}",
            message.role.to_uppercase(),
            n,
            total
        ),
    );
    if let Some(content) = message.content.as_deref().filter(|c| !c.is_empty()) {
        out.block(2, content);
    }

    let calls = message.tool_calls.as_deref().unwrap_or_default();
    if !calls.is_empty() {
        out.line(2, &format!("Tool Calls ({})", calls.len()));
        for call in calls {
            out.line(3, &call.name);
            out.block(4, &pretty_json_string(&call.arguments));
        }
    }
}
