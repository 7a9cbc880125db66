//! Data-driven dialect definitions
//!
//! A dialect file lists types and commands as arrays, so declaration order
//! survives the round trip through TOML or JSON.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::descriptor::{CommandDescriptor, TypeDescriptor};
use crate::dictionary::CommandDictionary;
use crate::error::{DictionaryError, DictionaryResult};
use crate::lint::lint;

/// Serialized form of a dialect
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialectFile {
    /// Dialect name
    pub name: String,
    /// Documented types, in declaration order
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
    /// Commands, in declaration order
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}

/// Encoding of a dialect file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl SourceFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> DictionaryResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for SourceFormat {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(DictionaryError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl DialectFile {
    /// Decode a dialect document
    pub fn parse(text: &str, format: SourceFormat) -> DictionaryResult<Self> {
        let file = match format {
            SourceFormat::Toml => toml::from_str(text)?,
            SourceFormat::Json => serde_json::from_str(text)?,
        };
        Ok(file)
    }

    /// Read and decode a dialect file, format chosen by extension
    pub fn load(path: &Path) -> DictionaryResult<Self> {
        let format = SourceFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, format)
    }

    /// Encode the dialect
    pub fn render(&self, format: SourceFormat) -> DictionaryResult<String> {
        let text = match format {
            SourceFormat::Toml => toml::to_string_pretty(self)?,
            SourceFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(text)
    }

    /// Snapshot an existing dictionary
    pub fn from_dictionary(dict: &CommandDictionary) -> Self {
        Self {
            name: dict.name().to_string(),
            types: dict.types().to_vec(),
            commands: dict.commands().to_vec(),
        }
    }

    /// Populate a dictionary in file order
    pub fn into_dictionary(self) -> CommandDictionary {
        let mut dict = CommandDictionary::new(self.name);
        for ty in self.types {
            dict.push_type(ty);
        }
        for cmd in self.commands {
            dict.push_command(cmd);
        }
        dict
    }
}

impl CommandDictionary {
    /// Load a dialect file and log any convention it does not follow
    pub fn load(path: &Path) -> DictionaryResult<Self> {
        let dict = DialectFile::load(path)?.into_dictionary();
        debug!(
            dialect = dict.name(),
            commands = dict.len(),
            types = dict.types().len(),
            "loaded dialect from {}",
            path.display()
        );
        for warning in lint(&dict) {
            warn!(dialect = dict.name(), "{warning}");
        }
        Ok(dict)
    }

    /// Encode this dictionary as a dialect document
    pub fn export(&self, format: SourceFormat) -> DictionaryResult<String> {
        DialectFile::from_dictionary(self).render(format)
    }
}
