//! Library error type
//!
//! Forest building and traversal are total; errors only arise while
//! loading documents or resolving user-supplied ids.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Span not found: {0}")]
    SpanNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
