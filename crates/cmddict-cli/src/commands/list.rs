//! Listings of the whole dialect

use cmddict_core::format::{format_command, format_type};

use super::Session;

/// One summary line per command, in declaration order
pub fn commands(session: &Session) {
    for cmd in session.dictionary.commands() {
        println!("{}", format_command(cmd).replace('\n', " "));
    }
}

/// One summary line per documented type
pub fn types(session: &Session) {
    for ty in session.dictionary.types() {
        println!("{}", format_type(ty).replace('\n', " "));
    }
}
