//! Span-tree explorer for agent-management platform traces
//!
//! Loads trace documents as served by the platform API, rebuilds the span
//! forest from flat parent references and renders the explorer tree, the
//! span details panel and the trace list for the terminal.

pub mod app;
pub mod core;
pub mod data;
pub mod domain;
pub mod error;
pub mod utils;

pub use error::ExplorerError;
