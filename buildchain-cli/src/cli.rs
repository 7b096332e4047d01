//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ListCommand, RunCommand, ValidateCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for turning layered TOML build descriptions into commands.
#[derive(Parser)]
#[command(name = "buildchain")]
#[command(
    version,
    about = "Resolve layered TOML build descriptions into build and flash commands",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the build command of a component
    Build(RunCommand),

    /// Print the flash command of a component
    Flash(RunCommand),

    /// List the command tables of a description
    List(ListCommand),

    /// Validate a description and the documents it includes
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
