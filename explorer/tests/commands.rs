//! End-to-end rendering through the application layer

use amp_trace_explorer::app::{CoreApp, TreeRequest};
use amp_trace_explorer::core::{AppConfig, ExplorerConfig, ListConfig, RenderConfig};
use amp_trace_explorer::data::types::TraceListTimeRange;
use amp_trace_explorer::domain::details::DetailsTab;
use amp_trace_explorer::domain::explorer::{ColorMode, TreeGuides};
use amp_trace_explorer::domain::traces::TraceQuery;
use amp_trace_explorer::utils::time::parse_iso_timestamp;
use serde_json::json;

fn app(promote_orphans: bool) -> CoreApp {
    CoreApp::new(AppConfig {
        render: RenderConfig {
            color: ColorMode::Never,
            guides: TreeGuides::Ascii,
            show_attributes: true,
        },
        explorer: ExplorerConfig { promote_orphans },
        list: ListConfig {
            search_preview_chars: 30,
            default_time_range: None,
        },
    })
}

fn trace_document() -> String {
    json!({
        "spans": [
            {
                "traceId": "trace-1",
                "spanId": "R",
                "name": "weather-agent",
                "startTime": "2025-06-01T10:00:00Z",
                "durationInNanos": 3_200_000_000u64,
                "ampAttributes": { "kind": "agent", "name": "Weather Agent" }
            },
            {
                "traceId": "trace-1",
                "spanId": "L2",
                "parentSpanId": "R",
                "name": "chat",
                "startTime": "2025-06-01T10:00:03Z",
                "durationInNanos": 2_000_000u64,
                "ampAttributes": { "kind": "llm" }
            },
            {
                "traceId": "trace-1",
                "spanId": "T1",
                "parentSpanId": "L1",
                "name": "get_weather",
                "startTime": "2025-06-01T10:00:02Z",
                "durationInNanos": 500_000u64,
                "ampAttributes": { "kind": "tool" }
            },
            {
                "traceId": "trace-1",
                "spanId": "L1",
                "parentSpanId": "R",
                "name": "chat",
                "startTime": "2025-06-01T10:00:01Z",
                "durationInNanos": 1_500_000u64,
                "attributes": { "gen_ai.request.model": "gpt-4o" },
                "ampAttributes": {
                    "kind": "llm",
                    "model": "gpt-4o",
                    "input": "What's the weather in Paris?",
                    "output": "Sunny"
                }
            },
            {
                "traceId": "trace-1",
                "spanId": "O",
                "parentSpanId": "gone",
                "name": "late-callback",
                "startTime": "2025-06-01T10:00:04Z",
                "durationInNanos": 1_000u64
            }
        ],
        "totalCount": 5
    })
    .to_string()
}

#[test]
fn test_tree_full() {
    let out = app(false)
        .render_tree(&trace_document(), &TreeRequest::default())
        .unwrap();

    assert_eq!(
        out,
        "> [-] [AGENT] weather-agent  (3.20s)  R\n\
         \x20 +-- [-] [LLM] chat  (1.50ms)  L1  model=gpt-4o\n\
         \x20 |   `--  -  [TOOL] get_weather  (500.00μs)  T1\n\
         \x20 `--  -  [LLM] chat  (2.00ms)  L2\n"
    );
}

#[test]
fn test_tree_collapse_and_select() {
    let request = TreeRequest {
        collapse: vec!["L1".to_string()],
        select: Some("L2".to_string()),
        ..Default::default()
    };
    let out = app(false).render_tree(&trace_document(), &request).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("  [-] [AGENT]"));
    assert!(lines[1].starts_with("  +-- [+] [LLM] chat"));
    assert!(lines[2].starts_with("> `--  -  [LLM] chat"));
}

#[test]
fn test_tree_collapse_all() {
    let request = TreeRequest {
        collapse_all: true,
        ..Default::default()
    };
    let out = app(false).render_tree(&trace_document(), &request).unwrap();
    assert_eq!(out, "> [+] [AGENT] weather-agent  (3.20s)  R\n");
}

#[test]
fn test_tree_selects_first_loaded_span_by_default() {
    // Input order decides, not start time: "L2" is listed first but starts last
    let document = json!([
        { "traceId": "t", "spanId": "L2", "parentSpanId": "R", "name": "second",
          "startTime": "2025-06-01T10:00:02Z" },
        { "traceId": "t", "spanId": "R", "name": "root",
          "startTime": "2025-06-01T10:00:00Z" },
        { "traceId": "t", "spanId": "L1", "parentSpanId": "R", "name": "first",
          "startTime": "2025-06-01T10:00:01Z" }
    ])
    .to_string();
    let out = app(false)
        .render_tree(&document, &TreeRequest::default())
        .unwrap();
    let selected: Vec<&str> = out.lines().filter(|l| l.starts_with("> ")).collect();

    assert_eq!(selected, ["> `--  -  second  (0.00μs)  L2"]);
}

#[test]
fn test_tree_focus() {
    let request = TreeRequest {
        focus: Some("L1".to_string()),
        ..Default::default()
    };
    let out = app(false).render_tree(&trace_document(), &request).unwrap();
    assert_eq!(
        out,
        "  [-] [LLM] chat  (1.50ms)  L1  model=gpt-4o\n\
         \x20 `--  -  [TOOL] get_weather  (500.00μs)  T1\n"
    );
}

#[test]
fn test_tree_promote_orphans() {
    let out = app(true)
        .render_tree(&trace_document(), &TreeRequest::default())
        .unwrap();
    assert!(out.ends_with("   -  late-callback  (1.00μs)  O\n"));
}

#[test]
fn test_tree_unknown_ids_rejected() {
    for request in [
        TreeRequest {
            select: Some("nope".to_string()),
            ..Default::default()
        },
        TreeRequest {
            collapse: vec!["nope".to_string()],
            ..Default::default()
        },
        TreeRequest {
            focus: Some("nope".to_string()),
            ..Default::default()
        },
    ] {
        let err = app(false)
            .render_tree(&trace_document(), &request)
            .unwrap_err();
        assert_eq!(err.to_string(), "Span not found: nope");
    }
}

#[test]
fn test_tree_empty_and_invalid_documents() {
    let out = app(false)
        .render_tree("[]", &TreeRequest::default())
        .unwrap();
    assert_eq!(out, "No spans found\n");

    let err = app(false)
        .render_tree("{ nope", &TreeRequest::default())
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse span document"));
}

#[test]
fn test_span_details_default_and_explicit() {
    let app = app(false);

    let first = app
        .render_span(&trace_document(), None, DetailsTab::Overview)
        .unwrap();
    assert!(first.starts_with("weather-agent\nAGENT  3200.00ms\n"));
    assert!(first.contains("Name\n  Weather Agent\n"));

    let llm = app
        .render_span(&trace_document(), Some("L1"), DetailsTab::Overview)
        .unwrap();
    assert!(llm.starts_with("chat\nLLM  1.50ms  gpt-4o\n"));
    assert!(llm.contains("Input\n  What's the weather in Paris?\n\nOutput\n  Sunny\n"));

    let err = app
        .render_span(&trace_document(), Some("missing"), DetailsTab::Raw)
        .unwrap_err();
    assert_eq!(err.to_string(), "Span not found: missing");
}

fn trace_list() -> String {
    json!({
        "traces": [
            {
                "traceId": "a1",
                "rootSpanId": "r1",
                "rootSpanName": "Weather Agent",
                "rootSpanKind": "agent",
                "startTime": "2025-06-01T11:50:00Z",
                "endTime": "2025-06-01T11:50:06Z",
                "durationInNanos": 6_000_000_000u64,
                "spanCount": 4,
                "status": { "errorCount": 1 },
                "input": "Weather in Paris?"
            },
            {
                "traceId": "b2",
                "rootSpanId": "r2",
                "rootSpanName": "Booking Agent",
                "startTime": "2025-05-25T09:00:00Z",
                "durationInNanos": 500_000_000u64,
                "spanCount": 2
            }
        ],
        "totalCount": 2
    })
    .to_string()
}

#[test]
fn test_list_sorted_newest_first() {
    let query = TraceQuery {
        now: parse_iso_timestamp("2025-06-01T12:00:00Z").unwrap(),
        ..Default::default()
    };
    let out = app(false).render_list(&trace_list(), &query, None).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("TRACE ID"));
    assert!(lines[1].starts_with("a1"));
    assert!(lines[1].contains("Error"));
    assert!(lines[2].starts_with("b2"));
    assert!(lines[2].contains("unknown"));
}

#[test]
fn test_list_search_and_time_range() {
    let query = TraceQuery {
        search: Some("agent".to_string()),
        time_range: Some(TraceListTimeRange::OneDay),
        now: parse_iso_timestamp("2025-06-01T12:00:00Z").unwrap(),
        limit: None,
    };
    let out = app(false).render_list(&trace_list(), &query, None).unwrap();

    assert!(out.starts_with("Time range: 1 Day\n\n"));
    assert!(out.ends_with("1 of 1 traces\n"));
}

#[test]
fn test_list_zero_preview_rejected() {
    let err = app(false)
        .render_list(&trace_list(), &TraceQuery::default(), Some(0))
        .unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
