//! One-shot completion query

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use cmddict_complete::{Completion, CompletionState, Presenter};
use cmddict_core::CommandDictionary;
use serde::Serialize;

use super::Session;

/// JSON shape printed by `complete --json`
#[derive(Debug, Serialize)]
struct CompletionReport<'a> {
    dialect: &'a str,
    token: &'a str,
    start: usize,
    end: usize,
    state: CompletionState,
    perfect: bool,
    best: Option<&'a str>,
    /// Primary alias of each candidate, best first
    candidates: Vec<&'a str>,
}

impl<'a> CompletionReport<'a> {
    fn new(dict: &'a CommandDictionary, completion: &'a Completion) -> Self {
        Self {
            dialect: dict.name(),
            token: completion.token(),
            start: completion.scanned.start,
            end: completion.scanned.end(),
            state: completion.state(),
            perfect: completion.is_perfect_match(),
            best: completion.best(dict).map(|(_, alias)| alias),
            candidates: completion
                .candidates()
                .iter()
                .filter_map(|&index| dict.command(index))
                .filter_map(|cmd| cmd.primary_alias())
                .collect(),
        }
    }
}

/// Complete the buffer read from `file` (or stdin) at `cursor`
pub fn run(session: &Session, file: Option<&Path>, cursor: Option<usize>, json: bool) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            let _ = io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read buffer from stdin")?;
            buf
        }
    };
    let cursor = cursor.unwrap_or_else(|| text.chars().count());

    let dict = &session.dictionary;
    let completion = session.engine().complete(&text, cursor);
    if json {
        let report = CompletionReport::new(dict, &completion);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let rendered = session.presenter().render(dict, &completion);
        println!("{}", rendered.trim_end());
    }
    Ok(())
}
