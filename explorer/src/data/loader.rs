//! Document loading
//!
//! Accepts either the API response envelope (`{"spans": [...]}`,
//! `{"traces": [...]}`) or a bare JSON array of items.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::types::{Span, Trace, TraceDetailsResponse, TraceListResponse};
use crate::error::ExplorerError;

#[derive(Deserialize)]
#[serde(untagged)]
enum SpanDocument {
    Envelope(TraceDetailsResponse),
    Bare(Vec<Span>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TraceDocument {
    Envelope(TraceListResponse),
    Bare(Vec<Trace>),
}

/// Read a document from a file path, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String, ExplorerError> {
    if path.as_os_str() == "-" {
        tracing::debug!("Reading document from stdin");
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    tracing::debug!(path = %path.display(), "Reading document");
    Ok(std::fs::read_to_string(path)?)
}

/// Parse spans from a trace details document
pub fn load_spans(content: &str) -> Result<Vec<Span>, ExplorerError> {
    let doc: SpanDocument =
        serde_json::from_str(content).map_err(|source| ExplorerError::Parse {
            what: "span document",
            source,
        })?;
    let spans = match doc {
        SpanDocument::Envelope(resp) => {
            if resp.total_count as usize > resp.spans.len() {
                tracing::warn!(
                    total = resp.total_count,
                    loaded = resp.spans.len(),
                    "Span document is partial"
                );
            }
            resp.spans
        }
        SpanDocument::Bare(spans) => spans,
    };
    tracing::debug!(count = spans.len(), "Loaded spans");
    Ok(spans)
}

/// Parse traces from a trace list document
pub fn load_traces(content: &str) -> Result<Vec<Trace>, ExplorerError> {
    let doc: TraceDocument =
        serde_json::from_str(content).map_err(|source| ExplorerError::Parse {
            what: "trace list document",
            source,
        })?;
    let traces = match doc {
        TraceDocument::Envelope(resp) => resp.traces,
        TraceDocument::Bare(traces) => traces,
    };
    tracing::debug!(count = traces.len(), "Loaded traces");
    Ok(traces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_spans_envelope() {
        let content = r#"{
            "spans": [
                { "traceId": "t", "spanId": "a", "name": "root", "startTime": "2025-01-01T00:00:00Z" }
            ],
            "totalCount": 1
        }"#;
        let spans = load_spans(content).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].span_id, "a");
    }

    #[test]
    fn test_load_spans_bare_array() {
        let content = r#"[
            { "traceId": "t", "spanId": "a" },
            { "traceId": "t", "spanId": "b", "parentSpanId": "a" }
        ]"#;
        let spans = load_spans(content).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].parent_id(), Some("a"));
    }

    #[test]
    fn test_load_spans_invalid() {
        let err = load_spans("not json").unwrap_err();
        assert!(matches!(err, ExplorerError::Parse { .. }));
    }

    #[test]
    fn test_load_traces_envelope() {
        let content = r#"{ "traces": [{ "traceId": "t1" }, { "traceId": "t2" }], "totalCount": 2 }"#;
        let traces = load_traces(content).unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[1].trace_id, "t2");
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        std::fs::write(&path, "[]").unwrap();
        assert_eq!(read_input(&path).unwrap(), "[]");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("/nonexistent/trace.json")).unwrap_err();
        assert!(matches!(err, ExplorerError::Io(_)));
    }
}
