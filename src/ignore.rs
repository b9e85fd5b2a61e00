//! Ignore pattern loading and matching from filters.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Structure to deserialize ignore patterns from TOML
#[derive(Debug, Deserialize)]
struct FilterConfig {
    ignore: IgnoreSection,
}

#[derive(Debug, Deserialize)]
struct IgnoreSection {
    patterns: Vec<String>,
}

// Embed the TOML file directly in the binary at compile time
const FILTERS_TOML: &str = include_str!("../filters.toml");

/// Load the built-in default ignore patterns from the embedded TOML
pub fn default_patterns() -> Result<Vec<String>> {
    let config: FilterConfig =
        toml::from_str(FILTERS_TOML).context("Failed to parse embedded filters TOML")?;
    Ok(config.ignore.patterns)
}

/// Check if a path should be excluded from listings based on the active patterns.
///
/// A pattern starting with `.` (and longer than one character) matches by
/// basename suffix, which covers both dotfiles (`.git`) and dot-extensions
/// (`.pyc`). Every other pattern matches by exact basename equality
/// (`node_modules`). Patterns are never anchored to a depth; the same rule
/// applies at every nesting level.
pub fn should_ignore(path: &Path, patterns: &[String]) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    patterns.iter().any(|pattern| {
        if pattern.starts_with('.') && pattern.len() > 1 {
            name.ends_with(pattern.as_str())
        } else {
            name == pattern
        }
    })
}
