//! CLI configuration

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cmddict_complete::DEFAULT_MAX_PASSES;
use cmddict_core::DEFAULT_MISSING_MARKER;
use cmddict_dialects::Dialect;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings read from the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Built-in dialect used when no dialect file is given
    #[serde(default = "default_dialect")]
    pub dialect: Dialect,

    /// Dialect file loaded instead of a built-in dialect
    #[serde(default)]
    pub dialect_file: Option<PathBuf>,

    /// Scanner restarts allowed before giving up
    #[serde(default = "default_max_scan_passes")]
    pub max_scan_passes: usize,

    /// Candidates listed for an ambiguous word
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Marker printed for letters without commands
    #[serde(default = "default_toc_missing_marker")]
    pub toc_missing_marker: char,

    /// REPL history file (`~/.cmddict_history` when unset)
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            dialect_file: None,
            max_scan_passes: default_max_scan_passes(),
            max_candidates: default_max_candidates(),
            toc_missing_marker: default_toc_missing_marker(),
            history_file: None,
        }
    }
}

impl CliConfig {
    /// Read `path`, or fall back to defaults when no file is named
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(?config, "loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line flags; a dialect file wins over a built-in dialect
    #[must_use]
    pub fn with_overrides(mut self, dialect: Option<Dialect>, dialect_file: Option<PathBuf>) -> Self {
        if let Some(dialect) = dialect {
            self.dialect = dialect;
            self.dialect_file = None;
        }
        if dialect_file.is_some() {
            self.dialect_file = dialect_file;
        }
        self
    }

    /// History file for the interactive editor
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".cmddict_history")))
    }
}

const fn default_dialect() -> Dialect {
    Dialect::EasyMesh
}

const fn default_max_scan_passes() -> usize {
    DEFAULT_MAX_PASSES
}

const fn default_max_candidates() -> usize {
    12
}

const fn default_toc_missing_marker() -> char {
    DEFAULT_MISSING_MARKER
}
