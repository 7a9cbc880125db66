//! Full help for one command

use anyhow::{bail, Result};
use cmddict_complete::find_matches;
use cmddict_core::format::{format_command_help, format_type_help};
use colored::Colorize;

use super::Session;

/// Print the help block of the command declaring `alias`, then its types
pub fn run(session: &Session, alias: &str) -> Result<()> {
    let dict = &session.dictionary;
    let Some(cmd) = dict.find_command(alias) else {
        let suggestions: Vec<&str> = find_matches(dict, alias)
            .candidates
            .iter()
            .filter_map(|&index| dict.command(index))
            .filter_map(|cmd| cmd.primary_alias())
            .collect();
        if suggestions.is_empty() {
            bail!("no command '{alias}' in dialect {}", dict.name());
        }
        bail!(
            "no command '{alias}' in dialect {} (did you mean: {}?)",
            dict.name(),
            suggestions.join(", ")
        );
    };

    print!("{}", format_command_help(cmd));
    for type_name in cmd.argument_types() {
        match dict.find_type(type_name) {
            Some(ty) => print!("\n{}", format_type_help(ty)),
            None => println!("\n{} {type_name}", "undocumented type:".yellow()),
        }
    }
    Ok(())
}
