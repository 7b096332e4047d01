//! Utility functions for CLI operations.

use crate::error::CliError;
use buildchain::{Chain, ConfigLoader, Logger};
use std::path::Path;

/// Environment variable naming the default entry document.
pub const INPUT_FILE_ENV: &str = "BUILDCHAIN_INPUT_FILE";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Flags are consumed through the logger
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Logger configured from the flags above.
    pub logger: Logger,
}

/// Load the chain starting at `input`.
pub fn load_chain(input: &Path, global: &GlobalOptions) -> Result<Chain, CliError> {
    let chain = ConfigLoader::load_chain(input).map_err(CliError::from)?;
    global.logger.debug(&format!(
        "loaded {} document(s) starting at {}",
        chain.len(),
        input.display()
    ));
    Ok(chain)
}

/// Write a formatted report to stdout, followed by a newline when non-empty.
pub fn print_report(report: &str) {
    if !report.is_empty() {
        println!("{report}");
    }
}
