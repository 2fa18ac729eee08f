//! Trace list: rows, filtering and table rendering

mod query;
mod row;
mod table;

pub use query::{TraceQuery, TraceSelection};
pub use row::{DurationSeverity, TraceRow};
pub use table::{TraceTableOptions, render_trace_table, row_cells};
