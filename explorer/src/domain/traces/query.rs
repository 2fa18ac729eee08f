//! Trace list filtering: search text, lookback window, limit

use chrono::{DateTime, Utc};

use super::row::TraceRow;
use crate::data::types::TraceListTimeRange;
use crate::utils::time::{parse_iso_timestamp, timestamp_sort_key};

/// What to show from a loaded trace list
#[derive(Debug, Clone)]
pub struct TraceQuery {
    pub search: Option<String>,
    pub time_range: Option<TraceListTimeRange>,
    /// Reference point for the time range
    pub now: DateTime<Utc>,
    pub limit: Option<usize>,
}

impl Default for TraceQuery {
    fn default() -> Self {
        Self {
            search: None,
            time_range: None,
            now: Utc::now(),
            limit: None,
        }
    }
}

/// Result of applying a query
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSelection {
    /// Matching rows, most recent first
    pub rows: Vec<TraceRow>,
    /// Rows inside the time range before search and limit
    pub total: usize,
    pub matched: usize,
    pub search_active: bool,
}

impl TraceQuery {
    /// Lowercased search text; `None` when blank.
    ///
    /// Surrounding whitespace only decides blankness and is otherwise
    /// matched as typed.
    pub fn search_text(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .map(str::to_lowercase)
    }

    pub fn in_time_range(&self, row: &TraceRow) -> bool {
        let Some(range) = self.time_range else {
            return true;
        };
        match parse_iso_timestamp(&row.start_time) {
            Some(start) => start >= self.now - range.duration(),
            None => {
                tracing::debug!(trace_id = %row.trace_id, "Unparsable start time, kept in range");
                true
            }
        }
    }

    pub fn apply(&self, rows: Vec<TraceRow>) -> TraceSelection {
        let mut rows: Vec<TraceRow> = rows
            .into_iter()
            .filter(|row| self.in_time_range(row))
            .collect();
        let total = rows.len();

        let search = self.search_text();
        if let Some(query) = &search {
            rows.retain(|row| row.matches(query));
        }
        let matched = rows.len();

        rows.sort_by_cached_key(|row| std::cmp::Reverse(timestamp_sort_key(&row.start_time)));
        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }

        tracing::debug!(total, matched, shown = rows.len(), "Applied trace query");
        TraceSelection {
            rows,
            total,
            matched,
            search_active: search.is_some(),
        }
    }
}
