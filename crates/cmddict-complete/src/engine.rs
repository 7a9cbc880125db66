//! Scan-and-resolve over a shared dictionary snapshot

use std::sync::Arc;

use cmddict_core::{CommandDescriptor, CommandDictionary};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resolver::{find_matches, select_best_match, RankedMatches};
use crate::scanner::{ScanOptions, ScannedToken, Scanner};

/// What a UI should show for a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionState {
    /// No command word near the cursor yet
    Searching,
    /// A word was found but no alias starts with it
    NoMatch,
    /// Exactly one candidate, or the best one spells the word exactly
    Resolved,
    /// Several candidates, none exact
    Ambiguous,
}

/// Result of one completion query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Completion {
    /// Token and its position
    pub scanned: ScannedToken,
    /// Candidates, best first
    pub ranked: RankedMatches,
}

impl Completion {
    /// Scanned word
    pub fn token(&self) -> &str {
        &self.scanned.text
    }

    /// Candidate command indices, best first
    pub fn candidates(&self) -> &[usize] {
        &self.ranked.candidates
    }

    /// Whether the best candidate spells the word exactly
    pub fn is_perfect_match(&self) -> bool {
        self.ranked.is_perfect_match()
    }

    /// Display state
    pub fn state(&self) -> CompletionState {
        if self.scanned.is_empty() {
            CompletionState::Searching
        } else if self.ranked.is_empty() {
            CompletionState::NoMatch
        } else if self.ranked.candidates.len() == 1 || self.is_perfect_match() {
            CompletionState::Resolved
        } else {
            CompletionState::Ambiguous
        }
    }

    /// The best candidate's descriptor and chosen alias
    pub fn best<'d>(&self, dict: &'d CommandDictionary) -> Option<(&'d CommandDescriptor, &'d str)> {
        let best = self.ranked.best?;
        let cmd = dict.command(best.command)?;
        let alias = cmd.aliases.get(best.alias)?;
        Some((cmd, alias.as_str()))
    }
}

/// Completion queries against one dialect
///
/// Cloning shares the dictionary; engines can be handed to other threads.
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    dictionary: Arc<CommandDictionary>,
    scanner: Scanner,
}

impl CompletionEngine {
    /// Create an engine with default scan options
    pub fn new(dictionary: Arc<CommandDictionary>) -> Self {
        Self::with_options(dictionary, ScanOptions::default())
    }

    /// Create an engine with custom scan options
    pub const fn with_options(dictionary: Arc<CommandDictionary>, options: ScanOptions) -> Self {
        Self {
            dictionary,
            scanner: Scanner::new(options),
        }
    }

    /// Dictionary queried by this engine
    pub fn dictionary(&self) -> &Arc<CommandDictionary> {
        &self.dictionary
    }

    /// Scan options in use
    pub const fn options(&self) -> ScanOptions {
        self.scanner.options()
    }

    /// Complete at the char offset `cursor`
    pub fn complete(&self, text: &str, cursor: usize) -> Completion {
        let scanned = self.scanner.scan(text, cursor);
        let matches = find_matches(&self.dictionary, &scanned.text);
        let ranked = select_best_match(&self.dictionary, matches);
        debug!(
            dialect = self.dictionary.name(),
            cursor,
            token = %scanned.text,
            candidates = ranked.candidates.len(),
            perfect = ranked.is_perfect_match(),
            "completion query"
        );
        Completion { scanned, ranked }
    }

    /// Complete at a byte offset, as reported by line editors
    pub fn complete_at_byte(&self, text: &str, byte_offset: usize) -> Completion {
        self.complete(text, byte_to_char_offset(text, byte_offset))
    }
}

/// Chars before `byte_offset`; offsets inside a char count that char as before
pub fn byte_to_char_offset(text: &str, byte_offset: usize) -> usize {
    text.char_indices()
        .take_while(|(index, _)| *index < byte_offset)
        .count()
}

/// Byte index of the char at `char_offset`, or the text length past the end
pub fn char_to_byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(index, _)| index)
}
