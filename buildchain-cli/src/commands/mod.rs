//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `run`: Shared implementation of `build` and `flash`
//! - `list`: List the command tables of a description
//! - `validate`: Validate a description
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod list;
pub mod run;
pub mod validate;

pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use run::RunCommand;
pub use validate::ValidateCommand;
