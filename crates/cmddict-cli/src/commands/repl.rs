//! Interactive editor with dictionary-driven tab completion
//!
//! Tab replaces the word before the cursor with a matching alias; the dimmed
//! hint shows the rest of the best alias and its signature. Entering a line
//! prints the help panel for the word at its end.

use std::borrow::Cow;

use anyhow::Result;
use cmddict_complete::{
    alias_matches, byte_to_char_offset, char_to_byte_offset, Completion, CompletionEngine, Presenter,
};
use cmddict_core::format::format_signature;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::{debug, warn};

use super::Session;

/// Line-editor helper backed by a [`CompletionEngine`]
#[derive(Debug, Clone)]
pub struct ReplHelper {
    engine: CompletionEngine,
}

impl ReplHelper {
    /// Wrap an engine
    pub const fn new(engine: CompletionEngine) -> Self {
        Self { engine }
    }

    /// Completion for a word ending exactly at the byte offset `pos`
    fn completion_at(&self, line: &str, pos: usize) -> Option<Completion> {
        let completion = self.engine.complete_at_byte(line, pos);
        let cursor = byte_to_char_offset(line, pos);
        (!completion.scanned.is_empty() && completion.scanned.end() == cursor).then_some(completion)
    }

    /// Replacement start (bytes) and one pair per matching alias, best command first
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let Some(completion) = self.completion_at(line, pos) else {
            return (pos, Vec::new());
        };
        let dict = self.engine.dictionary();
        let token = completion.token();

        let mut pairs = Vec::new();
        for cmd in completion.candidates().iter().filter_map(|&index| dict.command(index)) {
            let signature = format_signature(&cmd.args);
            for alias in cmd.aliases.iter().filter(|alias| alias_matches(alias, token)) {
                let display = if signature.is_empty() {
                    alias.clone()
                } else {
                    format!("{alias} {signature}")
                };
                pairs.push(Pair {
                    display,
                    replacement: alias.clone(),
                });
            }
        }
        (char_to_byte_offset(line, completion.scanned.start), pairs)
    }

    /// Rest of the best alias and its signature, only at end of line
    pub fn inline_hint(&self, line: &str, pos: usize) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let completion = self.completion_at(line, pos)?;
        let (cmd, alias) = completion.best(self.engine.dictionary())?;
        let rest = alias.strip_prefix(completion.token())?;
        let signature = format_signature(&cmd.args);
        if signature.is_empty() {
            (!rest.is_empty()).then(|| rest.to_string())
        } else {
            Some(format!("{rest} {signature}"))
        }
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        self.inline_hint(line, pos)
    }
}

impl Highlighter for ReplHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}

/// What the loop does after a line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

/// Start the interactive editor
pub fn start(session: &Session) -> Result<()> {
    let mut editor: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(ReplHelper::new(session.engine())));

    let history = session.config.history_path();
    if let Some(path) = &history {
        if editor.load_history(path).is_err() {
            debug!("no history at {}", path.display());
        }
    }

    print_welcome(session);
    let prompt = format!("{} ", format!("{}>", session.dictionary.name()).bright_blue());

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str())?;
                if handle_line(session, &line) == Action::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "Use :quit to exit.".bright_yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {err}", "Error".bright_red());
                break;
            }
        }
    }

    if let Some(path) = &history {
        if let Err(err) = editor.save_history(path) {
            warn!("could not save history to {}: {err}", path.display());
        }
    }
    Ok(())
}

fn handle_line(session: &Session, line: &str) -> Action {
    let trimmed = line.trim();
    match trimmed.split_once(' ').unwrap_or((trimmed, "")) {
        (":quit" | ":q", _) => return Action::Quit,
        (":toc", _) => super::toc::run(session, false),
        (":help", "") => print_help(),
        (":help", alias) => {
            if let Err(err) = super::describe::run(session, alias.trim()) {
                println!("{}", err.to_string().bright_red());
            }
        }
        (command, _) if command.starts_with(':') => {
            println!("{} {command} (try :help)", "unknown command".bright_red());
        }
        _ => {
            let completion = session.engine().complete(line, line.chars().count());
            let panel = session.presenter().render(&session.dictionary, &completion);
            println!("{}", panel.trim_end());
        }
    }
    Action::Continue
}

fn print_welcome(session: &Session) {
    println!(
        "{} {} ({} commands)",
        "cmddict".bright_blue().bold(),
        session.dictionary.name(),
        session.dictionary.len()
    );
    println!("Tab completes commands. Type :help for help, :quit to exit.");
}

fn print_help() {
    println!("{}", "Commands:".bright_green());
    println!("  :help <alias>   full help of a command");
    println!("  :toc            table of contents");
    println!("  :quit           exit");
    println!("Any other line shows the completion for its last word.");
}
