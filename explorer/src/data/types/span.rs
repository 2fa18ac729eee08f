//! Span types as served by the trace details API

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeMap, AttributeValue};
use crate::core::constants::{OTEL_STATUS_ERROR_CODE, OTEL_STATUS_ERROR_NAMES};

/// One recorded unit of work within a trace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub trace_id: String,
    pub span_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub duration_in_nanos: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<AttributeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amp_attributes: Option<AmpAttributes>,
}

impl Span {
    /// Parent id, treating an empty string as absent
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_span_id.as_deref().filter(|p| !p.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.parent_id().is_none()
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.as_ref().and_then(|attrs| attrs.get(key))
    }

    /// Whether the raw OTEL status code marks this span as failed
    pub fn has_error_status(&self) -> bool {
        self.status.as_deref().is_some_and(|s| {
            let s = s.trim();
            s == OTEL_STATUS_ERROR_CODE
                || OTEL_STATUS_ERROR_NAMES
                    .iter()
                    .any(|name| s.eq_ignore_ascii_case(name))
        })
    }

    /// Semantic kind, `Unknown` when the AMP envelope is missing
    pub fn amp_kind(&self) -> AmpKind {
        self.amp_attributes
            .as_ref()
            .map(|amp| amp.kind)
            .unwrap_or_default()
    }
}

/// Semantic role of a span in an agent execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmpKind {
    Llm,
    Tool,
    Embedding,
    Retriever,
    Rerank,
    Agent,
    Task,
    Chain,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AmpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Llm => "llm",
            Self::Tool => "tool",
            Self::Embedding => "embedding",
            Self::Retriever => "retriever",
            Self::Rerank => "rerank",
            Self::Agent => "agent",
            Self::Task => "task",
            Self::Chain => "chain",
            Self::Unknown => "unknown",
        }
    }

    /// Short badge shown in the tree; `None` for kinds without an icon
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Self::Llm => Some("LLM"),
            Self::Tool => Some("TOOL"),
            Self::Embedding => Some("EMBED"),
            Self::Agent => Some("AGENT"),
            Self::Chain | Self::Task => Some("FLOW"),
            Self::Retriever => Some("RETRIEVE"),
            Self::Rerank | Self::Unknown => None,
        }
    }
}

impl fmt::Display for AmpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic envelope layered over raw telemetry attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmpAttributes {
    #[serde(default)]
    pub kind: AmpKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<AmpContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<AmpContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SpanStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_usage: Option<LlmTokenUsage>,
}

impl AmpAttributes {
    pub fn tools(&self) -> &[ToolDefinition] {
        self.tools.as_deref().unwrap_or_default()
    }
}

/// Span input/output: free text or a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmpContent {
    Text(String),
    Messages(Vec<PromptMessage>),
}

impl AmpContent {
    /// Empty strings and empty conversations render as absent
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Messages(m) => m.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMessage {
    /// system, user, assistant, tool
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// JSON-encoded arguments as emitted by the model
    #[serde(default)]
    pub arguments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON schema, encoded as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanStatus {
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmTokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_input_tokens: Option<u64>,
    #[serde(default)]
    pub total_tokens: u64,
}
