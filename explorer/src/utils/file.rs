//! File path helpers

use std::path::PathBuf;

/// Expand a leading `~` to the home directory.
///
/// Relative paths stay relative; they resolve against the working directory
/// when opened.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
