//! List command implementation.
//!
//! This module implements the `list` command, which displays the command
//! tables of a description with the run modes they support and whether a
//! layer disables them.

use crate::error::CliError;
use crate::utils::{load_chain, print_report, GlobalOptions, INPUT_FILE_ENV};
use buildchain::{ReportFormat, TableSummary};
use clap::Args;
use std::path::PathBuf;

/// List the command tables of a description.
#[derive(Args)]
pub struct ListCommand {
    /// Entry document of the description
    #[arg(short = 'i', long, value_name = "FILE", env = INPUT_FILE_ENV)]
    pub input_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: ReportFormat,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let chain = load_chain(&self.input_file, global)?;
        let tables = TableSummary::from_chain(&chain);

        let formatter = self.format.create_formatter();
        print_report(&formatter.format_tables(&tables)?);
        Ok(())
    }
}
