//! Runtime configuration: ignore patterns and the environment-decoration flag.

use crate::ignore::default_patterns;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Effective configuration for a listing or render pass
#[derive(Debug, Clone)]
pub struct Config {
    /// Active ignore patterns, in order
    pub ignore: Vec<String>,
    /// Whether environment detection and power decoration are enabled
    pub environments: bool,
}

/// Structure to deserialize an optional user configuration file. Any absent
/// field falls back to the built-in default.
#[derive(Debug, Deserialize)]
struct FileConfig {
    ignore: Option<FileIgnoreSection>,
    environments: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct FileIgnoreSection {
    patterns: Vec<String>,
}

impl Config {
    /// Built-in defaults: the embedded pattern set, environments enabled
    pub fn defaults() -> Result<Self> {
        Ok(Config {
            ignore: default_patterns()?,
            environments: true,
        })
    }

    /// Load configuration, overlaying an optional TOML file on the defaults.
    /// A user-supplied pattern list replaces the default list entirely.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Config::defaults()?;

        if let Some(path) = path {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let file: FileConfig = toml::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;

            if let Some(section) = file.ignore {
                config.ignore = section.patterns;
            }
            if let Some(environments) = file.environments {
                config.environments = environments;
            }
        }

        Ok(config)
    }
}
