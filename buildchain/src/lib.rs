#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # buildchain
//!
//! A library for resolving layered build descriptions into shell commands.
//!
//! Build descriptions are TOML documents chained through `include`
//! pointers, from the most specific (a board) to the most general (a SoC
//! family). Each document declares command tables whose token sequences
//! are assembled into the exact command text a runner executes.
//!
//! ## Core Types
//!
//! - [`Chain`] and [`ConfigLoader`]: Loading and layering documents
//! - [`KeyResolver`] and [`StatusChecker`]: Lookups through the chain
//! - [`CommandAssembler`] and [`AssembledCommand`]: Command synthesis
//! - [`Override`]: One-shot token substitution from the command line
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use buildchain::{Chain, CommandAssembler, ConfigDocument, Override, RunMode};
//!
//! let doc = ConfigDocument::from_toml_str(
//!     "[header]\nname = \"mp1\"\n[tfa]\nexeCommand = [\"target\"]\ntarget = \"all\"\n",
//!     "mp1.toml",
//! )
//! .unwrap();
//! let chain = Chain::new(vec![doc]).unwrap();
//! let ov = Override::parse("target:bl2").unwrap();
//!
//! let cmd = CommandAssembler::new()
//!     .assemble("tfa", &chain, "../tf-a/", RunMode::Build, Some(&ov))
//!     .unwrap();
//! assert_eq!(cmd.text, " bl2 ");
//! ```

pub mod assembler;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod overrides;
pub mod resolver;
pub mod source;
pub mod status;

// Re-export key types at crate root for convenience
pub use assembler::{AssembledCommand, CommandAssembler, JobCount, RunMode, Token};
pub use config::{Chain, CommandTable, ConfigDocument, ConfigLoader, Header, TableValue};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    resolve_all, resolve_command, AggregateReport, Request, ResolveOptions, TableOutcome,
};
pub use output::{ReportFormat, ReportFormatter, TableSummary};
pub use overrides::Override;
pub use resolver::KeyResolver;
pub use source::SourceResolver;
pub use status::StatusChecker;
