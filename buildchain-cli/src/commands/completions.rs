//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "buildchain";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        match self.shell {
            Shell::Bash => global.logger.info(
                "install with: buildchain completions bash > ~/.local/share/bash-completion/completions/buildchain",
            ),
            Shell::Zsh => global
                .logger
                .info("install with: buildchain completions zsh > ~/.zsh/completions/_buildchain"),
            Shell::Fish => global.logger.info(
                "install with: buildchain completions fish > ~/.config/fish/completions/buildchain.fish",
            ),
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
