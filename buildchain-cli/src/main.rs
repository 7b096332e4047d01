//! Main entry point for the buildchain CLI.
//!
//! This is the command-line interface for resolving layered build
//! descriptions. It provides commands for:
//! - `build`: Print the build command of a component (or of all of them)
//! - `flash`: Print the flash command of a component (or of all of them)
//! - `list`: List the command tables of a description
//! - `validate`: Check a description and the documents it includes

mod cli;
mod commands;
mod error;
mod utils;

use buildchain::RunMode;
use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity; library traces go through it too
    let logger = buildchain::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Build(cmd) => cmd.execute(RunMode::Build, &global),
        cli::Command::Flash(cmd) => cmd.execute(RunMode::Flash, &global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
