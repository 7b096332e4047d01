//! Resolution of a single command table.

use std::fmt;

use crate::assembler::{AssembledCommand, CommandAssembler, JobCount, RunMode};
use crate::config::{Chain, RESERVED_TABLE};
use crate::error::Result;
use crate::overrides::Override;
use crate::source::SourceResolver;
use crate::status::StatusChecker;

/// What the caller asked to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// One named command table.
    Single(String),
    /// Every command table of the root document.
    All,
}

impl Request {
    /// Interpret a command-line name; `all` is the aggregate request.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildchain::operations::Request;
    ///
    /// assert_eq!(Request::parse("all"), Request::All);
    /// assert_eq!(Request::parse("linux"), Request::Single("linux".to_string()));
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == RESERVED_TABLE {
            Self::All
        } else {
            Self::Single(name.to_string())
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(name) => write!(f, "{name}"),
            Self::All => write!(f, "{RESERVED_TABLE}"),
        }
    }
}

/// Options shared by single and aggregate resolution.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Build or flash.
    pub mode: RunMode,
    /// Explicit source directory; single requests only.
    pub source: Option<String>,
    /// Token override; single requests only.
    pub override_arg: Option<Override>,
    /// Job count of the build-tool marker.
    pub jobs: JobCount,
}

impl ResolveOptions {
    /// Options for `mode` with everything else defaulted.
    #[must_use]
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            source: None,
            override_arg: None,
            jobs: JobCount::default(),
        }
    }

    /// Set the explicit source directory.
    #[must_use]
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    /// Set the token override.
    #[must_use]
    pub fn with_override(mut self, override_arg: Option<Override>) -> Self {
        self.override_arg = override_arg;
        self
    }

    /// Set the job count.
    #[must_use]
    pub fn with_jobs(mut self, jobs: JobCount) -> Self {
        self.jobs = jobs;
        self
    }

    pub(crate) fn assembler(&self) -> CommandAssembler {
        CommandAssembler::new().with_jobs(self.jobs)
    }
}

/// Resolve the source directory of `command` and assemble it.
///
/// The command must exist and be unblocked before its source directory is
/// looked at, so a disabled table is reported as such even when it has no
/// source configured.
///
/// # Errors
///
/// Returns any error of [`Chain::ensure_command`], [`StatusChecker::check`],
/// [`SourceResolver::resolve`], or [`CommandAssembler::assemble`].
pub fn resolve_command(
    chain: &Chain,
    command: &str,
    options: &ResolveOptions,
) -> Result<AssembledCommand> {
    chain.ensure_command(command)?;
    StatusChecker::check(command, chain)?;
    let source = SourceResolver::resolve(options.source.as_deref(), command, chain)?;
    options.assembler().assemble(
        command,
        chain,
        &source,
        options.mode,
        options.override_arg.as_ref(),
    )
}
