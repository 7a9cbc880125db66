//! Text renderings of descriptors
//!
//! Every function here is pure; presenters compose them into help output.

use std::fmt::Write as _;

use crate::descriptor::{ArgumentDescriptor, CommandDescriptor, TypeDescriptor};

/// `float n` or `float xoff = 0.0`
pub fn format_argument(arg: &ArgumentDescriptor) -> String {
    match &arg.default {
        Some(default) => format!("{} {} = {}", arg.type_name, arg.name, default),
        None => format!("{} {}", arg.type_name, arg.name),
    }
}

/// Braced argument list, optional tail in square brackets
///
/// `{float ny, float nz [, float xoff = 0.0, bool absolute = true]}`.
/// Empty when the command takes no argument.
pub fn format_signature(args: &[ArgumentDescriptor]) -> String {
    if args.is_empty() {
        return String::new();
    }

    let mut out = String::from("{");
    let mut in_optional = false;
    for (i, arg) in args.iter().enumerate() {
        if arg.is_optional() && !in_optional {
            out.push_str(" [");
            in_optional = true;
        }
        if i != 0 {
            out.push_str(", ");
        }
        out.push_str(&format_argument(arg));
    }
    if in_optional {
        out.push(']');
    }
    out.push('}');
    out
}

/// `tx,translatex [Translate vertices along the X axis]{float n}`
pub fn format_command(cmd: &CommandDescriptor) -> String {
    format!(
        "{} [{}]{}",
        cmd.aliases.join(","),
        cmd.description,
        format_signature(&cmd.args)
    )
}

/// Aliases for headings: `tx | translatex`
pub fn format_aliases(cmd: &CommandDescriptor) -> String {
    cmd.aliases.join(" | ")
}

/// `float Fraction value 0.0`
pub fn format_type(ty: &TypeDescriptor) -> String {
    let mut out = ty.identifier.clone();
    for line in &ty.syntax {
        out.push(' ');
        out.push_str(line);
    }
    out
}

/// Multi-line help block for one command
///
/// Heading with aliases and signature, the description, then one line per
/// argument.
pub fn format_command_help(cmd: &CommandDescriptor) -> String {
    let mut out = format_aliases(cmd);
    let signature = format_signature(&cmd.args);
    if !signature.is_empty() {
        out.push(' ');
        out.push_str(&signature);
    }
    out.push('\n');
    for line in cmd.description.lines() {
        let _ = writeln!(out, "    {line}");
    }
    for arg in &cmd.args {
        let marker = if arg.is_optional() { "optional" } else { "required" };
        let _ = writeln!(out, "  - {} ({marker})", format_argument(arg));
    }
    out
}

/// Multi-line documentation block for one type
pub fn format_type_help(ty: &TypeDescriptor) -> String {
    let mut out = format!("{}\n", ty.identifier);
    for line in &ty.syntax {
        let _ = writeln!(out, "    {line}");
    }
    out
}
