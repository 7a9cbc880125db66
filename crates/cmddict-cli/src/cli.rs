//! Command-line interface definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cmddict_core::SourceFormat;
use cmddict_dialects::Dialect;

/// Command dictionary and completion for scene-setup dialects
#[derive(Parser, Debug)]
#[command(name = "cmddict")]
#[command(version)]
#[command(about = "Query, inspect and complete easymesh/scenesetup command dialects")]
#[command(long_about = "
cmddict knows the commands of a small scene-setup language: their aliases,
arguments and documentation. Given a buffer and a cursor it finds the command
word being typed and ranks the commands it may refer to.

Built-in dialects are 'easymesh' and 'scenesetup'; any other dialect can be
loaded from a TOML or JSON file.
")]
pub struct Cli {
    /// Increase verbosity (can be used multiple times)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Built-in dialect to use
    #[arg(short = 'd', long, global = true)]
    pub dialect: Option<Dialect>,

    /// Load the dialect from a TOML or JSON file instead
    #[arg(short = 'f', long, value_name = "PATH", global = true)]
    pub dialect_file: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short = 'c', long, value_name = "PATH", env = "CMDDICT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Complete the command word at a cursor position
    Complete {
        /// File holding the buffer (stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Cursor offset in characters (end of buffer when omitted)
        #[arg(long)]
        cursor: Option<usize>,

        /// Print the completion as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the alphabetical table of contents
    Toc {
        /// Leave out letters no alias starts with
        #[arg(long)]
        hide_missing: bool,
    },

    /// Show the full help of one command
    Describe {
        /// Any alias of the command
        alias: String,
    },

    /// List every command in declaration order
    Commands,

    /// List every documented type
    Types,

    /// Check the dialect for documentation problems (exit status 1 on findings)
    Lint,

    /// Write the active dialect as a dialect file
    Export {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: SourceFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the interactive editor
    Repl,
}
