//! Best-effort resolution of every command table.

use serde::Serialize;

use crate::assembler::AssembledCommand;
use crate::config::Chain;
use crate::error::Error;
use crate::operations::resolve::ResolveOptions;
use crate::source::SourceResolver;
use crate::status::StatusChecker;

/// What happened to one table of an aggregate request.
#[derive(Debug)]
pub enum TableOutcome {
    /// The table was assembled.
    Assembled(AssembledCommand),
    /// The table is disabled by a `status` field.
    Skipped {
        /// The command table.
        command: String,
        /// The blocking error, naming the status and its layer.
        reason: Error,
    },
    /// Resolution failed; sibling tables were still processed.
    Failed {
        /// The command table.
        command: String,
        /// Why it failed.
        error: Error,
    },
}

impl TableOutcome {
    /// Name of the command table this outcome is about.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::Assembled(cmd) => &cmd.command,
            Self::Skipped { command, .. } | Self::Failed { command, .. } => command,
        }
    }
}

/// Per-table outcomes of an aggregate request, in root table order.
#[derive(Debug, Default)]
pub struct AggregateReport {
    /// One entry per command table of the root document.
    pub outcomes: Vec<TableOutcome>,
}

impl AggregateReport {
    /// The successfully assembled commands.
    pub fn commands(&self) -> impl Iterator<Item = &AssembledCommand> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            TableOutcome::Assembled(cmd) => Some(cmd),
            _ => None,
        })
    }

    /// Whether any table failed. Skipped tables are not failures.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|outcome| matches!(outcome, TableOutcome::Failed { .. }))
    }

    /// Summary counts for reporting.
    #[must_use]
    pub fn summary(&self) -> AggregateSummary {
        let mut summary = AggregateSummary::default();
        for outcome in &self.outcomes {
            match outcome {
                TableOutcome::Assembled(_) => summary.assembled += 1,
                TableOutcome::Skipped { .. } => summary.skipped += 1,
                TableOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}

/// Counts of each outcome kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    /// Tables assembled.
    pub assembled: usize,
    /// Tables skipped because of a status.
    pub skipped: usize,
    /// Tables that failed.
    pub failed: usize,
}

/// Resolve every command table of the root document.
///
/// Every table uses the root header's source directory; the explicit
/// source and the override of `options` are not applied, since they target
/// a single component.
#[must_use]
pub fn resolve_all(chain: &Chain, options: &ResolveOptions) -> AggregateReport {
    let assembler = options.assembler();
    let mut report = AggregateReport::default();

    for command in chain.command_names() {
        let outcome = match StatusChecker::check(command, chain) {
            Err(reason) if reason.is_blocked() => {
                log::debug!("skipping '{command}': {reason}");
                TableOutcome::Skipped {
                    command: command.to_string(),
                    reason,
                }
            }
            _ => {
                let assembled = SourceResolver::resolve(None, command, chain).and_then(|source| {
                    assembler.assemble(command, chain, &source, options.mode, None)
                });
                match assembled {
                    Ok(cmd) => TableOutcome::Assembled(cmd),
                    Err(error) => {
                        log::debug!("'{command}' failed: {error}");
                        TableOutcome::Failed {
                            command: command.to_string(),
                            error,
                        }
                    }
                }
            }
        };
        report.outcomes.push(outcome);
    }

    report
}
