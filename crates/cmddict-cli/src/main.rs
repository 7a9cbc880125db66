//! cmddict - command dictionary and completion for scene-setup dialects
//!
//! Inspects the built-in dialects (or one loaded from a TOML/JSON file),
//! answers completion queries for a buffer and cursor, and offers an
//! interactive editor with tab completion.

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let Some(command) = cli.command.clone() else {
        println!("{}", "cmddict: command dictionary and completion".bright_blue().bold());
        println!("Try 'cmddict --help' for more information.");
        return Ok(());
    };

    let session = Session::open(&cli)?;
    match command {
        Commands::Complete { file, cursor, json } => {
            commands::complete::run(&session, file.as_deref(), cursor, json)?;
        }
        Commands::Toc { hide_missing } => {
            commands::toc::run(&session, hide_missing);
        }
        Commands::Describe { alias } => {
            commands::describe::run(&session, &alias)?;
        }
        Commands::Commands => {
            commands::list::commands(&session);
        }
        Commands::Types => {
            commands::list::types(&session);
        }
        Commands::Lint => {
            if !commands::lint::run(&session) {
                std::process::exit(1);
            }
        }
        Commands::Export { format, output } => {
            commands::export::run(&session, format, output.as_deref())?;
        }
        Commands::Repl => {
            commands::repl::start(&session)?;
        }
    }

    Ok(())
}

/// Initialize logging/tracing based on verbosity level
fn init_logging(verbose: u8) {
    let filter_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
