//! Output formatting for assembled commands and chain listings.
//!
//! Text output is what an external runner consumes: one command per line,
//! exactly as assembled. JSON and YAML carry the full records for tooling.

mod formatters;
mod summary;

use crate::assembler::AssembledCommand;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter, YamlFormatter};
pub use summary::TableSummary;

/// Trait for formatting resolution results.
pub trait ReportFormatter {
    /// Format assembled commands, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Render`] if serialization fails.
    fn format_commands(&self, commands: &[&AssembledCommand]) -> Result<String>;

    /// Format a listing of the command tables of a chain.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Render`] if serialization fails.
    fn format_tables(&self, tables: &[TableSummary]) -> Result<String>;
}

/// Available report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain command text, one per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl ReportFormat {
    /// Create a formatter for this format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}
