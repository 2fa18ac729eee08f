//! API data types
//!
//! Shapes mirror the JSON the platform's trace endpoints serve (camelCase).

mod attributes;
mod span;
mod trace;

pub use attributes::{AttributeMap, AttributeValue, map_to_json};
pub use span::{
    AmpAttributes, AmpContent, AmpKind, LlmTokenUsage, PromptMessage, Span, SpanStatus, ToolCall,
    ToolDefinition,
};
pub use trace::{
    Trace, TraceDetailsResponse, TraceListResponse, TraceListTimeRange, TraceStatus,
    TraceTokenUsage,
};
