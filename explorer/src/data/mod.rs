//! Data layer: API types and document loading

pub mod loader;
pub mod types;

pub use loader::{load_spans, load_traces, read_input};
