//! Command to validate a description.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use buildchain::ConfigLoader;
use clap::Args;
use std::path::PathBuf;

/// Validate a description and every document it includes.
#[derive(Args)]
pub struct ValidateCommand {
    /// Entry document to validate
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.input_file.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.input_file.display()
            )));
        }

        // 2. Load the whole chain; every layer is validated on the way
        match ConfigLoader::load_chain(&self.input_file) {
            Ok(chain) => {
                for doc in chain.documents() {
                    global
                        .logger
                        .info(&format!("'{}' ({})", doc.name(), doc.path().display()));
                }
                println!("Description is valid ({} document(s))", chain.len());
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Description validation failed".to_string(),
                ))
            }
        }
    }
}
