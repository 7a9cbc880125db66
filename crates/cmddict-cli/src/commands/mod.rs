//! Command implementations for the cmddict CLI
//!
//! Each module implements one subcommand over a shared [`Session`].

pub mod complete;
pub mod describe;
pub mod export;
pub mod lint;
pub mod list;
pub mod repl;
pub mod toc;

use std::sync::Arc;

use anyhow::{Context, Result};
use cmddict_complete::{CompletionEngine, ScanOptions, TextPresenter};
use cmddict_core::CommandDictionary;
use tracing::info;

use crate::cli::Cli;
use crate::config::CliConfig;

/// Active dictionary plus the settings every subcommand reads
#[derive(Debug, Clone)]
pub struct Session {
    /// Dictionary selected by flags and config
    pub dictionary: Arc<CommandDictionary>,
    /// Effective configuration
    pub config: CliConfig,
}

impl Session {
    /// Resolve configuration and load the selected dialect
    pub fn open(cli: &Cli) -> Result<Self> {
        let config = CliConfig::load(cli.config.as_deref())?
            .with_overrides(cli.dialect, cli.dialect_file.clone());

        let dictionary = match &config.dialect_file {
            Some(path) => Arc::new(
                CommandDictionary::load(path)
                    .with_context(|| format!("Failed to load dialect file: {}", path.display()))?,
            ),
            None => config.dialect.dictionary(),
        };
        info!(
            dialect = dictionary.name(),
            commands = dictionary.len(),
            types = dictionary.types().len(),
            "dictionary ready"
        );

        Ok(Self { dictionary, config })
    }

    /// Completion engine over the session dictionary
    pub fn engine(&self) -> CompletionEngine {
        CompletionEngine::with_options(
            Arc::clone(&self.dictionary),
            ScanOptions {
                max_passes: self.config.max_scan_passes,
            },
        )
    }

    /// Text presenter honouring `max_candidates`
    pub fn presenter(&self) -> TextPresenter {
        TextPresenter {
            max_candidates: self.config.max_candidates,
            ..TextPresenter::default()
        }
    }
}
