//! Application entry: configuration, input loading and command dispatch

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::core::cli::{self, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{ENV_LOG, LOG_TARGET};
use crate::data::types::{Span, TraceListTimeRange};
use crate::data::{load_spans, load_traces, read_input};
use crate::domain::details::{DetailsTab, SpanDetailsPanel};
use crate::domain::explorer::{ExplorerSession, SpanForest};
use crate::domain::traces::{TraceQuery, TraceRow, render_trace_table};
use crate::error::ExplorerError;
use crate::utils::file::expand_path;

/// Options of the `tree` command
#[derive(Debug, Clone, Default)]
pub struct TreeRequest {
    pub collapse: Vec<String>,
    pub collapse_all: bool,
    pub select: Option<String>,
    pub focus: Option<String>,
}

pub struct CoreApp {
    pub config: AppConfig,
}

impl CoreApp {
    pub fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let config = AppConfig::load(&cli_config)?;
        let app = Self::new(config);
        let output = app.execute(&command)?;
        print!("{}", output);
        Ok(())
    }

    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Logs go to stderr; stdout carries only rendered output
    fn init_logging() {
        let default_filter = format!("warn,{}=info", LOG_TARGET);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
            .compact()
            .with_env_filter(filter)
            .init();
    }

    /// Run a parsed command and return what it prints
    pub fn execute(&self, command: &Commands) -> Result<String> {
        match command {
            Commands::Tree {
                input,
                collapse,
                collapse_all,
                select,
                focus,
            } => {
                let content = Self::read(input)?;
                let request = TreeRequest {
                    collapse: collapse.clone(),
                    collapse_all: *collapse_all,
                    select: select.clone(),
                    focus: focus.clone(),
                };
                self.render_tree(&content, &request)
            }
            Commands::Span {
                input,
                span_id,
                tab,
            } => {
                let content = Self::read(input)?;
                self.render_span(&content, span_id.as_deref(), tab.unwrap_or_default())
            }
            Commands::List {
                input,
                search,
                time_range,
                limit,
                preview_chars,
            } => {
                let content = Self::read(input)?;
                let query = TraceQuery {
                    search: search.clone(),
                    time_range: time_range.or(self.config.list.default_time_range),
                    now: Utc::now(),
                    limit: *limit,
                };
                self.render_list(&content, &query, *preview_chars)
            }
        }
    }

    fn read(input: &Path) -> Result<String> {
        let path = if input.as_os_str() == "-" {
            input.to_path_buf()
        } else {
            expand_path(&input.to_string_lossy())
        };
        read_input(&path).with_context(|| format!("Failed to read input: {}", display(&path)))
    }

    pub fn render_tree(&self, content: &str, request: &TreeRequest) -> Result<String> {
        let spans: Arc<[Span]> = Arc::from(load_spans(content)?);
        if spans.is_empty() {
            return Ok("No spans found\n".to_string());
        }

        // Without --select the first loaded span is selected, as the console does
        let default_selection = spans[0].span_id.clone();
        let mut session = ExplorerSession::with_options(
            spans,
            self.config.forest_options(),
            |span: &Span| {
                tracing::debug!(span_id = %span.span_id, name = %span.name, "Span selected");
            },
        );

        let orphans = session.forest().orphan_ids().len();
        if orphans > 0 && !self.config.explorer.promote_orphans {
            tracing::warn!(
                count = orphans,
                "Spans with a missing parent are hidden (use --promote-orphans to list them)"
            );
        }

        if request.collapse_all {
            let parents: Vec<String> = session
                .forest()
                .nodes()
                .filter(|node| node.has_children())
                .map(|node| node.id.clone())
                .collect();
            for id in &parents {
                session.set_expanded(id, false);
            }
        }
        for id in &request.collapse {
            if session.forest().node(id).is_none() {
                return Err(ExplorerError::SpanNotFound(id.clone()).into());
            }
            if !session.set_expanded(id, false) {
                tracing::warn!(span_id = %id, "Span has no children, nothing to collapse");
            }
        }

        let select = request.select.as_deref().unwrap_or(&default_selection);
        let selected = session
            .activate(select)
            .map(|span| span.span_id.clone())
            .ok_or_else(|| ExplorerError::SpanNotFound(select.to_string()))?;
        session.set_selected_span_id(Some(selected));

        if let Some(id) = &request.focus
            && session.forest().node(id).is_none()
        {
            return Err(ExplorerError::SpanNotFound(id.clone()).into());
        }

        Ok(session.render(self.config.render_options(), request.focus.as_deref()))
    }

    pub fn render_span(&self, content: &str, span_id: Option<&str>, tab: DetailsTab) -> Result<String> {
        let spans = load_spans(content)?;
        let forest = SpanForest::build_with(Arc::from(spans), self.config.forest_options());

        let span = match span_id {
            Some(id) => forest
                .span_of(id)
                .ok_or_else(|| ExplorerError::SpanNotFound(id.to_string()))?,
            // Same default as the trace view: the first span of the document
            None => forest
                .spans()
                .first()
                .context("Trace has no spans to show")?,
        };
        tracing::debug!(span_id = %span.span_id, tab = %tab, "Rendering span details");

        Ok(SpanDetailsPanel::new(span, self.config.palette()).render(tab))
    }

    pub fn render_list(
        &self,
        content: &str,
        query: &TraceQuery,
        preview_chars: Option<usize>,
    ) -> Result<String> {
        let mut options = self.config.table_options();
        if let Some(chars) = preview_chars {
            if chars == 0 {
                return Err(ExplorerError::Config(
                    "preview width must be greater than 0".to_string(),
                )
                .into());
            }
            options.preview_chars = chars;
        }

        let traces = load_traces(content)?;
        let rows: Vec<TraceRow> = traces.iter().map(TraceRow::from_trace).collect();
        let selection = query.apply(rows);

        let mut out = String::new();
        if let Some(range) = query.time_range {
            out.push_str(&time_range_line(range));
        }
        out.push_str(&render_trace_table(&selection, &options));
        Ok(out)
    }
}

fn time_range_line(range: TraceListTimeRange) -> String {
    format!("Time range: {}\n\n", range.label())
}

fn display(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
