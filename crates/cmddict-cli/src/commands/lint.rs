//! Dialect lint

use cmddict_core::lint;
use colored::Colorize;

use super::Session;

/// Print every finding; returns whether the dialect is clean
pub fn run(session: &Session) -> bool {
    let dict = &session.dictionary;
    let warnings = lint(dict);
    if warnings.is_empty() {
        println!("{} {}", "✓ No lint warnings in".bright_green(), dict.name());
        return true;
    }

    for warning in &warnings {
        println!("{} {warning}", "warning:".bright_yellow());
    }
    println!();
    println!("{}: {} warnings in {}", "Total".bright_red(), warnings.len(), dict.name());
    false
}
