//! Trace list rows

use crate::core::constants::{DEFAULT_ROOT_SPAN_KIND, DURATION_FAST_SECS, DURATION_SLOW_SECS};
use crate::data::types::{Trace, TraceStatus, TraceTokenUsage};
use crate::utils::format::nanos_to_seconds;
use crate::utils::string::contains_ignore_case;

/// Colour bucket for a trace duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSeverity {
    Fast,
    Slow,
    Critical,
}

impl DurationSeverity {
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < DURATION_FAST_SECS {
            Self::Fast
        } else if seconds < DURATION_SLOW_SECS {
            Self::Slow
        } else {
            Self::Critical
        }
    }
}

/// One trace, normalized for display
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRow {
    pub trace_id: String,
    pub root_span_name: String,
    pub root_span_kind: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_in_seconds: f64,
    pub span_count: u64,
    pub status: TraceStatus,
    pub token_usage: Option<TraceTokenUsage>,
    pub input: Option<String>,
    pub output: Option<String>,
}

impl TraceRow {
    pub fn from_trace(trace: &Trace) -> Self {
        Self {
            trace_id: trace.trace_id.clone(),
            root_span_name: trace.root_span_name.clone(),
            root_span_kind: trace
                .root_span_kind
                .clone()
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| DEFAULT_ROOT_SPAN_KIND.to_string()),
            start_time: trace.start_time.clone(),
            end_time: trace.end_time.clone(),
            duration_in_seconds: nanos_to_seconds(trace.duration_in_nanos),
            span_count: trace.span_count,
            status: trace.status.unwrap_or_default(),
            token_usage: trace.token_usage,
            input: trace.input.clone(),
            output: trace.output.clone(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.status.error_count > 0
    }

    pub fn status_label(&self) -> &'static str {
        if self.has_errors() { "Error" } else { "Success" }
    }

    pub fn severity(&self) -> DurationSeverity {
        DurationSeverity::from_seconds(self.duration_in_seconds)
    }

    /// Case-insensitive match over id, name, kind, input and output.
    ///
    /// `query_lower` must already be lowercased.
    pub fn matches(&self, query_lower: &str) -> bool {
        contains_ignore_case(&self.trace_id, query_lower)
            || contains_ignore_case(&self.root_span_name, query_lower)
            || contains_ignore_case(&self.root_span_kind, query_lower)
            || self
                .input
                .as_deref()
                .is_some_and(|s| contains_ignore_case(s, query_lower))
            || self
                .output
                .as_deref()
                .is_some_and(|s| contains_ignore_case(s, query_lower))
    }
}
