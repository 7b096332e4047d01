//! Command synthesis from a classified token sequence.
//!
//! Assembly walks the token sequence of one command table and produces the
//! exact command text. It is a pure function of the chain, the command name,
//! the source directory, the run mode, the job count, and the override.
//!
//! # Spacing rules
//!
//! Pieces of output are normally separated by one space. Source markers,
//! `_key_` tokens and `NAME=` tokens set an adjacency flag so that the next
//! resolved key is glued to them. Tool markers after the first one are
//! separated by `;` so that several tool invocations run in sequence.
//!
//! # Examples
//!
//! ```
//! use buildchain::assembler::{CommandAssembler, RunMode};
//! use buildchain::config::{Chain, ConfigDocument};
//!
//! let doc = ConfigDocument::from_toml_str(
//!     r#"
//! [header]
//! name = "test"
//!
//! [example]
//! exeCommand = ["_make", "optimization", "target", "BUILD_PLAT=", "buildDir"]
//! optimization = ""
//! target = "all"
//! buildDir = "../build"
//! "#,
//!     "test.toml",
//! )
//! .unwrap();
//! let chain = Chain::new(vec![doc]).unwrap();
//!
//! let cmd = CommandAssembler::new()
//!     .assemble("example", &chain, "../linux/v1/", RunMode::Build, None)
//!     .unwrap();
//! assert_eq!(
//!     cmd.text,
//!     " make -j$(($(nproc) - 1)) -C ../linux/v1/  all BUILD_PLAT=../build "
//! );
//! ```

mod token;

#[cfg(test)]
mod proptests;

pub use token::{Token, BUILD_TOOL_PREFIX, CONFIGURE_TOOL_PREFIX, SOURCE_MARKER};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::config::{Chain, BUILD_FIELD, FLASH_FIELD};
use crate::error::{Error, Result};
use crate::overrides::Override;
use crate::resolver::KeyResolver;
use crate::status::StatusChecker;

/// Which token sequence of a command table to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Use `exeCommand`.
    Build,
    /// Use `flashCommand`.
    Flash,
}

impl RunMode {
    /// The command-table field holding this mode's token sequence.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Build => BUILD_FIELD,
            Self::Flash => FLASH_FIELD,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::Flash => write!(f, "flash"),
        }
    }
}

/// The `-j` argument of the build-tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobCount {
    /// Let the shell compute available cores minus one.
    #[default]
    Shell,
    /// A fixed job count.
    Fixed(u32),
}

impl JobCount {
    /// Available cores on this machine minus one, never below one.
    #[must_use]
    pub fn detected() -> Self {
        let cores = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        let jobs = u32::try_from(cores.saturating_sub(1)).unwrap_or(u32::MAX);
        Self::Fixed(jobs.max(1))
    }
}

impl FromStr for JobCount {
    type Err = String;

    /// `auto` detects the core count now, `shell` defers it to the shell,
    /// and a number is used as is.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(Self::detected()),
            "shell" => Ok(Self::Shell),
            n => n.parse().map(Self::Fixed).map_err(|_| {
                format!("invalid job count '{s}': expected a number, 'auto' or 'shell'")
            }),
        }
    }
}

impl fmt::Display for JobCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell => write!(f, "$(($(nproc) - 1))"),
            Self::Fixed(n) => write!(f, "{n}"),
        }
    }
}

/// A successfully assembled command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledCommand {
    /// The command table it was assembled from.
    pub command: String,
    /// The run mode used.
    pub mode: RunMode,
    /// The source directory emitted by markers.
    pub source: String,
    /// The command text, including its leading and trailing space.
    pub text: String,
    /// Non-fatal warnings raised while assembling.
    pub warnings: Vec<String>,
}

impl fmt::Display for AssembledCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Turns command tables into command text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandAssembler {
    jobs: JobCount,
}

impl CommandAssembler {
    /// An assembler that lets the shell compute the job count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `jobs` for the build-tool marker.
    #[must_use]
    pub const fn with_jobs(mut self, jobs: JobCount) -> Self {
        self.jobs = jobs;
        self
    }

    /// Assemble the `mode` token sequence of `command`.
    ///
    /// The override, if any, replaces the first token whose literal equals
    /// its key; later occurrences resolve normally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] if a layer does not declare the
    /// table, [`Error::StatusBlocked`] if it is disabled,
    /// [`Error::MissingRunKey`] if no layer defines the mode's sequence, and
    /// [`Error::UnresolvedKey`] for the first key that cannot be resolved.
    pub fn assemble(
        &self,
        command: &str,
        chain: &Chain,
        source: &str,
        mode: RunMode,
        override_arg: Option<&Override>,
    ) -> Result<AssembledCommand> {
        chain.ensure_command(command)?;
        StatusChecker::check(command, chain)?;

        let field = mode.field();
        let tokens: Vec<Token<'_>> = chain
            .tables(command)
            .find_map(|(_, table)| table.tokens(field))
            .ok_or_else(|| Error::MissingRunKey {
                command: command.to_string(),
                field: field.to_string(),
            })?
            .iter()
            .map(|literal| Token::classify(literal))
            .collect();

        let mut text = String::new();
        let mut warnings = Vec::new();
        let mut attach = false;
        let mut first_tool = true;
        let mut pending_override = override_arg;

        for token in tokens {
            if let Some(literal) = token.overridable_literal() {
                if let Some(ov) = pending_override.filter(|ov| ov.matches(literal)) {
                    text.push_str(ov.replacement());
                    pending_override = None;
                    continue;
                }
            }

            match token {
                Token::BuildTool => {
                    if !first_tool {
                        text.push(';');
                    }
                    first_tool = false;
                    text.push_str(&format!(" make -j{} -C {source}", self.jobs));
                }
                Token::ConfigureTool => {
                    if !first_tool {
                        text.push(';');
                    }
                    first_tool = false;
                    text.push_str(&format!(" cmake -S {source}"));
                }
                Token::SourceDir => {
                    if !attach {
                        text.push(' ');
                    }
                    text.push_str(source);
                    attach = true;
                }
                Token::AdjacentKey { key, .. } => {
                    text.push_str(KeyResolver::resolve(key, command, chain)?);
                    attach = true;
                }
                Token::Assignment(literal) => {
                    text.push(' ');
                    text.push_str(literal);
                    attach = true;
                }
                Token::Key(key) => {
                    if key.contains('_') {
                        let warning = format!(
                            "the use of underscores is reserved, try not to use them in keys (in '{key}')"
                        );
                        log::warn!("{command}: {warning}");
                        warnings.push(warning);
                    }
                    let value = KeyResolver::resolve(key, command, chain)?;
                    if !attach {
                        text.push(' ');
                    }
                    text.push_str(value);
                    attach = false;
                }
            }
        }

        text.push(' ');
        log::debug!("{mode} command for '{command}':{text}");

        Ok(AssembledCommand {
            command: command.to_string(),
            mode,
            source: source.to_string(),
            text,
            warnings,
        })
    }
}
