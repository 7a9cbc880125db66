//! Built-in dialects
//!
//! Each dialect is declared in code and built on first use. The resulting
//! dictionaries are immutable and shared through [`Arc`], so every caller and
//! thread sees the same snapshot.

pub mod easymesh;
pub mod scenesetup;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use cmddict_core::{argument, lint, CommandDictionary, DictionaryBuilder};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// `(type, name, default)`
pub(crate) type ArgRow = (&'static str, &'static str, Option<&'static str>);

/// `(aliases, description, arguments)`
pub(crate) type CommandRow = (&'static [&'static str], &'static str, &'static [ArgRow]);

/// Append a table of command rows in order
pub(crate) fn register_rows(mut builder: DictionaryBuilder, rows: &[CommandRow]) -> DictionaryBuilder {
    for (aliases, description, args) in rows {
        let args = args
            .iter()
            .map(|(type_name, name, default)| argument(type_name, name, *default))
            .collect();
        builder = builder.register_command(aliases.iter().copied(), *description, args);
    }
    builder
}

/// A dialect shipped with the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Mesh construction commands
    EasyMesh,
    /// Scene and light setup commands
    SceneSetup,
}

/// Unknown dialect name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect '{0}' (expected one of: easymesh, scenesetup)")]
pub struct UnknownDialect(pub String);

static EASYMESH: Lazy<Arc<CommandDictionary>> = Lazy::new(|| checked(easymesh::build()));
static SCENESETUP: Lazy<Arc<CommandDictionary>> = Lazy::new(|| checked(scenesetup::build()));

fn checked(dict: CommandDictionary) -> Arc<CommandDictionary> {
    for warning in lint(&dict) {
        warn!(dialect = dict.name(), "{warning}");
    }
    Arc::new(dict)
}

impl Dialect {
    /// Every built-in dialect
    pub const ALL: [Self; 2] = [Self::EasyMesh, Self::SceneSetup];

    /// Dialect name as used on the command line and in dialect files
    pub const fn name(self) -> &'static str {
        match self {
            Self::EasyMesh => easymesh::NAME,
            Self::SceneSetup => scenesetup::NAME,
        }
    }

    /// Shared snapshot of the dialect's dictionary
    pub fn dictionary(self) -> Arc<CommandDictionary> {
        match self {
            Self::EasyMesh => Arc::clone(&EASYMESH),
            Self::SceneSetup => Arc::clone(&SCENESETUP),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>(), Ok(dialect));
            assert_eq!(dialect.dictionary().name(), dialect.name());
        }
        assert_eq!("EasyMesh".parse::<Dialect>(), Ok(Dialect::EasyMesh));
        assert_eq!("lua".parse::<Dialect>(), Err(UnknownDialect("lua".into())));
    }

    #[test]
    fn snapshots_are_shared() {
        let a = Dialect::EasyMesh.dictionary();
        let b = Dialect::EasyMesh.dictionary();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn dialects_are_independent() {
        let mesh = Dialect::EasyMesh.dictionary();
        let scene = Dialect::SceneSetup.dictionary();
        assert!(mesh.find_command("addlight").is_none());
        assert!(scene.find_command("csgu").is_none());
    }
}
