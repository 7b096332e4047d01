//! Resolution requests against a loaded chain.
//!
//! A request either names one command table or asks for every table of
//! the root document (`all`). Single requests fail as a whole; aggregate
//! requests are best-effort and report each table separately.
//!
//! # Examples
//!
//! ```no_run
//! use buildchain::assembler::RunMode;
//! use buildchain::config::ConfigLoader;
//! use buildchain::operations::{resolve_command, ResolveOptions};
//! use buildchain::Override;
//! use std::path::Path;
//!
//! let chain = ConfigLoader::load_chain(Path::new("mp157f-dk2.toml")).unwrap();
//! let options = ResolveOptions::new(RunMode::Build)
//!     .with_source(Some("../tf-a/tuto/".to_string()))
//!     .with_override(Some(Override::parse("target:boot").unwrap()));
//!
//! let cmd = resolve_command(&chain, "tfa", &options).unwrap();
//! println!("{cmd}");
//! ```

pub mod aggregate;
pub mod resolve;

pub use aggregate::{resolve_all, AggregateReport, AggregateSummary, TableOutcome};
pub use resolve::{resolve_command, Request, ResolveOptions};
