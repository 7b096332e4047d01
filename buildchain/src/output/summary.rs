//! Per-table summaries of a chain, used by listings.

use serde::Serialize;

use crate::assembler::RunMode;
use crate::config::Chain;

/// What a command table offers once the whole chain is taken into account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// The command table name.
    pub name: String,
    /// Some layer defines a build sequence.
    pub build: bool,
    /// Some layer defines a flash sequence.
    pub flash: bool,
    /// The blocking status, if any layer sets one.
    pub status: Option<String>,
    /// Declared name of the layer that set the status.
    pub status_document: Option<String>,
}

impl TableSummary {
    /// Summarize `command` across `chain`.
    #[must_use]
    pub fn new(command: &str, chain: &Chain) -> Self {
        let has = |mode: RunMode| {
            chain
                .tables(command)
                .any(|(_, table)| table.tokens(mode.field()).is_some())
        };
        let blocked = chain
            .tables(command)
            .find_map(|(doc, table)| table.status().map(|status| (doc.name(), status)));

        Self {
            name: command.to_string(),
            build: has(RunMode::Build),
            flash: has(RunMode::Flash),
            status: blocked.map(|(_, status)| status.to_string()),
            status_document: blocked.map(|(doc, _)| doc.to_string()),
        }
    }

    /// Summaries of every command table of the root document, in order.
    #[must_use]
    pub fn from_chain(chain: &Chain) -> Vec<Self> {
        chain
            .command_names()
            .map(|name| Self::new(name, chain))
            .collect()
    }

    /// Whether the table is disabled.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.status.is_some()
    }
}
