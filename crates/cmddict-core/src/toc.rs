//! Table of contents: which letters `a`..=`z` start at least one alias

use std::fmt;

use crate::descriptor::CommandDescriptor;

/// Marker emitted for a letter no alias starts with
pub const DEFAULT_MISSING_MARKER: char = '-';

/// One letter slot of the table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocEntry {
    /// At least one alias starts with this letter
    Letter(char),
    /// No alias starts with this letter
    Missing(char),
}

impl TocEntry {
    /// The letter this slot stands for
    pub const fn letter(self) -> char {
        match self {
            Self::Letter(c) | Self::Missing(c) => c,
        }
    }

    /// Whether some alias starts with the letter
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Letter(_))
    }
}

/// The 26 letter slots, in alphabetical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOfContents {
    entries: Vec<TocEntry>,
}

impl TableOfContents {
    /// Scan every alias of every command for each letter
    pub fn from_commands(commands: &[CommandDescriptor]) -> Self {
        let entries = ('a'..='z')
            .map(|letter| {
                let present = commands
                    .iter()
                    .flat_map(|cmd| cmd.aliases.iter())
                    .any(|alias| alias.starts_with(letter));
                if present {
                    TocEntry::Letter(letter)
                } else {
                    TocEntry::Missing(letter)
                }
            })
            .collect();
        Self { entries }
    }

    /// All 26 slots
    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    /// Letters with at least one alias
    pub fn present_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.is_present())
            .map(|entry| entry.letter())
    }

    /// Render with [`DEFAULT_MISSING_MARKER`]
    pub fn render(&self, include_missing_marker: bool) -> String {
        self.render_with(include_missing_marker.then_some(DEFAULT_MISSING_MARKER))
    }

    /// Render with a custom marker; `None` skips missing letters
    pub fn render_with(&self, missing_marker: Option<char>) -> String {
        self.entries
            .iter()
            .filter_map(|entry| match (entry, missing_marker) {
                (TocEntry::Letter(c), _) => Some(*c),
                (TocEntry::Missing(_), marker) => marker,
            })
            .collect()
    }
}

impl fmt::Display for TableOfContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}
