//! Build and flash command implementation.
//!
//! Both commands resolve a component (or `all` of them) through the chain
//! and print the assembled command text; they differ only in which token
//! sequence of each table is used.

use crate::error::CliError;
use crate::utils::{load_chain, print_report, GlobalOptions, INPUT_FILE_ENV};
use buildchain::operations::{resolve_all, resolve_command, Request, ResolveOptions, TableOutcome};
use buildchain::{JobCount, Override, ReportFormat, RunMode};
use clap::Args;
use std::path::PathBuf;

/// Resolve and print the command of a component.
#[derive(Args)]
pub struct RunCommand {
    /// Component (command table) to resolve, or `all`
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Entry document of the description
    #[arg(short = 'i', long, value_name = "FILE", env = INPUT_FILE_ENV)]
    pub input_file: PathBuf,

    /// Source directory, overriding the configured one
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<String>,

    /// Replace the value of one token, as KEY:VALUE
    #[arg(short = 'o', long = "override", value_name = "KEY:VALUE")]
    pub override_arg: Option<String>,

    /// Job count for make: a number, `auto` (cores minus one, detected now)
    /// or `shell` (cores minus one, computed by the shell; the default)
    #[arg(long, value_name = "N")]
    pub jobs: Option<JobCount>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: ReportFormat,
}

impl RunCommand {
    /// Execute the command in `mode`.
    pub fn execute(self, mode: RunMode, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate arguments before touching the filesystem
        let override_arg = self
            .override_arg
            .as_deref()
            .map(Override::parse)
            .transpose()?;

        // 2. Load the chain
        let chain = load_chain(&self.input_file, global)?;

        // 3. Resolve
        let options = ResolveOptions::new(mode)
            .with_source(self.source)
            .with_override(override_arg)
            .with_jobs(self.jobs.unwrap_or_default());
        let formatter = self.format.create_formatter();

        let request = Request::parse(&self.command);
        global
            .logger
            .debug(&format!("{mode} request for '{request}', jobs {}", options.jobs));

        match request {
            Request::Single(command) => {
                // Assembly warnings reach stderr through the installed logger
                // as they are raised, even when a later token fails
                let cmd = resolve_command(&chain, &command, &options)?;
                print_report(&formatter.format_commands(&[&cmd])?);
                Ok(())
            }
            Request::All => {
                if options.source.is_some() || options.override_arg.is_some() {
                    global
                        .logger
                        .warn("--source and --override are ignored when resolving all commands");
                }

                let report = resolve_all(&chain, &options);
                for outcome in &report.outcomes {
                    match outcome {
                        TableOutcome::Assembled(_) => {}
                        TableOutcome::Skipped { reason, .. } => {
                            global.logger.info(&format!("skipped: {reason}"));
                        }
                        TableOutcome::Failed { command, error } => {
                            global.logger.error(&format!("{command}: {error}"));
                        }
                    }
                }

                let commands: Vec<_> = report.commands().collect();
                print_report(&formatter.format_commands(&commands)?);

                let summary = report.summary();
                if report.has_failures() {
                    return Err(CliError::SemanticFailure(format!(
                        "{} of {} {mode} commands failed",
                        summary.failed,
                        report.outcomes.len()
                    )));
                }
                Ok(())
            }
        }
    }
}
