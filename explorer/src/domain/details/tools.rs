//! Tools tab: tool definitions offered to the model

use super::PanelText;
use crate::data::types::ToolDefinition;
use crate::utils::json::pretty_json_string;

pub(super) fn write_tools(out: &mut PanelText<'_>, tools: &[ToolDefinition]) {
    if tools.is_empty() {
        out.line(0, "No tools available");
        return;
    }

    out.heading(&format!("Available Tools ({})", tools.len()));
    for tool in tools {
        out.line(1, &tool.name);
        if let Some(description) = tool.description.as_deref().filter(|d| !d.is_empty()) {
            out.block(2, description);
        }
        if let Some(parameters) = tool.parameters.as_deref().filter(|p| !p.is_empty()) {
            out.line(2, "Parameters:");
            out.block(3, &pretty_json_string(parameters));
        }
    }
}
