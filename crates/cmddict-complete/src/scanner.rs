//! Cursor token scanner
//!
//! Heuristic, not a tokenizer. Command names are short lowercase words; the
//! other shapes found next to them are numbers and color literals such as
//! `#f80` that may be glued to a command (`sc#f80`). The scan walks back to
//! the start of the run under the cursor, restarting when it lands on a color
//! literal, then reads the lowercase letters forward.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default bound on color-literal restarts
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Scanner tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Backward passes allowed before giving up with an empty token
    pub max_passes: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

/// Token found near the cursor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScannedToken {
    /// Lowercase letters only, possibly empty
    pub text: String,
    /// Char offset of the first letter in the buffer
    pub start: usize,
}

impl ScannedToken {
    /// Char offset one past the last letter
    pub fn end(&self) -> usize {
        self.start + self.text.chars().count()
    }

    /// Whether no command word was found
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Extracts the command word under or before the cursor
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    options: ScanOptions,
}

/// Characters the cursor does not step past when biasing forward
const fn is_break(c: char) -> bool {
    c == ' ' || c == '\n'
}

/// Characters that stop the first backward walk
const fn is_anchor(c: char) -> bool {
    c.is_ascii_lowercase() || c == '\n'
}

/// Characters of an identifier or color literal run
const fn is_run(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '#'
}

impl Scanner {
    /// Create a scanner
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Current options
    pub const fn options(&self) -> ScanOptions {
        self.options
    }

    /// Scan `text` around the char offset `cursor`
    ///
    /// Offsets past the end are clamped to the last character.
    pub fn scan(&self, text: &str, cursor: usize) -> ScannedToken {
        let chars: Vec<char> = text.chars().collect();
        let Some(last) = chars.len().checked_sub(1) else {
            return ScannedToken::default();
        };

        let mut pos = cursor.min(last);
        if !is_break(chars[pos]) {
            pos = (pos + 1).min(last);
        }

        let mut settled = false;
        for pass in 0..self.options.max_passes {
            while pos > 0 && !is_anchor(chars[pos]) {
                pos -= 1;
            }
            while pos > 0 && is_run(chars[pos - 1]) {
                pos -= 1;
            }

            let on_color_literal = pos > 0 && chars[pos - 1] == ' ' && chars[pos] == '#';
            if !on_color_literal {
                settled = true;
                break;
            }
            trace!(pass, pos, "cursor landed on a color literal, scanning again");
        }

        if !settled {
            trace!(max_passes = self.options.max_passes, "scan did not settle");
            return ScannedToken {
                text: String::new(),
                start: pos,
            };
        }

        let word: String = chars[pos..]
            .iter()
            .take_while(|c| c.is_ascii_lowercase())
            .collect();
        ScannedToken {
            text: word,
            start: pos,
        }
    }
}

/// Scan with default options, token text only
pub fn scan_token(text: &str, cursor: usize) -> String {
    Scanner::default().scan(text, cursor).text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_buffers() {
        assert_eq!(scan_token("", 0), "");
        assert_eq!(scan_token("", 12), "");
        assert_eq!(scan_token("   ", 1), "");
        assert_eq!(scan_token("\n\n", 1), "");
    }

    #[test]
    fn cursor_at_start() {
        assert_eq!(scan_token("tx 5", 0), "tx");
        assert_eq!(scan_token("t", 0), "t");
    }

    #[test]
    fn cursor_at_or_past_end() {
        assert_eq!(scan_token("ty .25 csg", 10), "csg");
        assert_eq!(scan_token("ty .25 csg", 9), "csg");
        assert_eq!(scan_token("ty .25 csg", 500), "csg");
    }

    #[test]
    fn cursor_inside_word_reads_whole_word() {
        let scan = Scanner::default().scan("sc#fff ab 1", 7);
        assert_eq!(scan.text, "ab");
        assert_eq!(scan.start, 7);
        assert_eq!(scan.end(), 9);
    }

    #[test]
    fn trailing_arguments_are_skipped() {
        assert_eq!(scan_token("tx 12", 5), "tx");
        assert_eq!(scan_token("rx 90 ", 5), "rx");
        assert_eq!(scan_token("t (1 2 3)", 8), "t");
    }

    #[test]
    fn glued_color_literal_is_part_of_the_run() {
        let scan = Scanner::default().scan("[sc#0f0", 6);
        assert_eq!(scan.text, "sc");
        assert_eq!(scan.start, 1);
    }

    #[test]
    fn separate_color_literal_triggers_rescan() {
        assert_eq!(scan_token("tx 5 #fff", 8), "tx");
        assert_eq!(scan_token("scv #f00", 7), "scv");
    }

    #[test]
    fn leading_digits_are_not_absorbed() {
        // The run starts on the digit, so no letter follows the scan start
        assert_eq!(scan_token("12tx", 3), "");
        assert_eq!(scan_token("ab 12 tx", 7), "tx");
    }

    #[test]
    fn previous_line_is_reached_through_newline() {
        assert_eq!(scan_token("tx 1\nty", 6), "ty");
        assert_eq!(scan_token("tx\n", 3), "tx");
    }

    #[test]
    fn pass_bound_gives_up_with_empty_token() {
        // Each lowercase color literal costs one extra pass
        let text = "ab #fff #fff #fff";
        assert_eq!(scan_token(text, 16), "ab");
        assert_eq!(Scanner::new(ScanOptions { max_passes: 4 }).scan(text, 16).text, "ab");

        let capped = Scanner::new(ScanOptions { max_passes: 3 }).scan(text, 16);
        assert!(capped.is_empty());

        let none = Scanner::new(ScanOptions { max_passes: 0 }).scan("tx", 0);
        assert!(none.is_empty());
    }

    #[test]
    fn non_ascii_text_is_counted_in_chars() {
        let scan = Scanner::default().scan("é tx", 3);
        assert_eq!(scan.text, "tx");
        assert_eq!(scan.start, 2);
    }
}
