//! Command completion for cmddict dialects
//!
//! The pipeline runs once per keystroke or cursor move:
//!
//! 1. [`scanner`] extracts the command word around the cursor
//! 2. [`resolver`] finds every command with an alias prefixed by that word and
//!    moves the best one to the front
//! 3. a [`render::Presenter`] turns the result into something a UI can show
//!
//! [`CompletionEngine`] wires the first two steps over a shared dictionary.
//! Nothing in this crate blocks or fails; an unhelpful buffer simply yields an
//! empty result.

pub mod engine;
pub mod render;
pub mod resolver;
pub mod scanner;

pub use engine::{byte_to_char_offset, char_to_byte_offset, Completion, CompletionEngine, CompletionState};
pub use render::{Presenter, TextPresenter, NO_MATCH_PREFIX, SEARCHING_PLACEHOLDER};
pub use resolver::{alias_matches, find_matches, select_best_match, BestMatch, MatchResult, RankedMatches};
pub use scanner::{scan_token, ScanOptions, ScannedToken, Scanner, DEFAULT_MAX_PASSES};
