//! Utility functions for the application

pub mod file;
pub mod format;
pub mod json;
pub mod string;
pub mod time;
