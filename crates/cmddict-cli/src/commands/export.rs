//! Dialect export

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cmddict_core::SourceFormat;
use tracing::info;

use super::Session;

/// Write the active dictionary as a dialect file, or to stdout
pub fn run(session: &Session, format: SourceFormat, output: Option<&Path>) -> Result<()> {
    let text = session
        .dictionary
        .export(format)
        .with_context(|| format!("Failed to encode dialect {}", session.dictionary.name()))?;

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            info!(dialect = session.dictionary.name(), ?format, "exported to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
