//! Error types for the buildchain library.
//!
//! This module provides the error hierarchy for loading configuration
//! chains and assembling commands, using `thiserror` for ergonomic error
//! handling. Every failure is structural (bad configuration, missing key,
//! missing path), so nothing here is ever retried.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a buildchain error.
///
/// # Examples
///
/// ```
/// use buildchain::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(" make all ".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the buildchain library.
#[derive(Debug, Error)]
pub enum Error {
    /// A document is not valid TOML.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// The document that failed to parse.
        path: PathBuf,
        /// The parser's description of the problem.
        message: String,
    },

    /// A document has no `[header]` table.
    #[error("header not found in {}", path.display())]
    MissingHeader {
        /// The document without a header.
        path: PathBuf,
    },

    /// A document's header has no `name` key.
    #[error("header of {} needs a 'name' key", path.display())]
    MissingName {
        /// The document whose header lacks a name.
        path: PathBuf,
    },

    /// A document declares a table with a reserved name.
    #[error("'{name}' can't be used as a table (in {})", path.display())]
    ReservedName {
        /// The document declaring the table.
        path: PathBuf,
        /// The reserved identifier.
        name: String,
    },

    /// A document named by `include` could not be opened or parsed.
    #[error("included file {} (from {}) could not be loaded: {reason}", path.display(), from.display())]
    IncludeNotFound {
        /// The include target.
        path: PathBuf,
        /// The document containing the `include` key.
        from: PathBuf,
        /// Why the include target could not be loaded.
        reason: String,
    },

    /// Following `include` pointers revisited a document.
    #[error("include cycle detected: {} is included more than once", path.display())]
    IncludeCycle {
        /// The document that was reached a second time.
        path: PathBuf,
    },

    /// A value in a document has the wrong type.
    #[error("invalid value for '{key}' in table [{table}] of {document}: {reason}")]
    InvalidValue {
        /// Declared name of the document.
        document: String,
        /// The table holding the value.
        table: String,
        /// The offending key.
        key: String,
        /// What was expected.
        reason: String,
    },

    /// A layer of the chain does not declare the requested command table.
    #[error("the command '{command}' is not found, check the file: {document}")]
    UnknownCommand {
        /// The requested command table.
        command: String,
        /// Declared name of the first document lacking the table.
        document: String,
    },

    /// The command table carries a `status` field somewhere in the chain.
    #[error("received the status: '{status}' from the TOML file: {document}")]
    StatusBlocked {
        /// The blocked command table.
        command: String,
        /// The status text.
        status: String,
        /// Declared name of the document carrying the status.
        document: String,
    },

    /// No layer defines the run-kind field for the requested mode.
    #[error("{field} not found for '{command}' in any TOML files")]
    MissingRunKey {
        /// The command table.
        command: String,
        /// The missing field (`exeCommand` or `flashCommand`).
        field: String,
    },

    /// No layer defines a key referenced by a token.
    #[error("element '{key}' of '{command}' not found in any TOML files (chain starting at {document})")]
    UnresolvedKey {
        /// The key that could not be resolved.
        key: String,
        /// The command table it was looked up in.
        command: String,
        /// Declared name of the root document.
        document: String,
    },

    /// No source directory was given and none is configured.
    #[error("missing a source for '{command}' in the TOML header or in the command options")]
    MissingSource {
        /// The command needing a source directory.
        command: String,
    },

    /// The selected source directory does not exist.
    #[error("the source directory {} is not found", path.display())]
    SourceDirectoryNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// An override argument is not of the form `key:value`.
    #[error("invalid override '{value}': {reason}")]
    InvalidOverride {
        /// The raw override argument.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A chain was built without any document.
    #[error("a configuration chain needs at least one document")]
    EmptyChain,

    /// A report could not be serialized.
    #[error("failed to render {format} output: {message}")]
    Render {
        /// The requested output format.
        format: String,
        /// The serializer's error message.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error was raised while loading the configuration chain.
    ///
    /// Load-stage errors abort the whole run, while assembly errors only
    /// abort the command being resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildchain::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::MissingHeader { path: PathBuf::from("mp1.toml") };
    /// assert!(err.is_load_error());
    /// ```
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::MissingHeader { .. }
                | Self::MissingName { .. }
                | Self::ReservedName { .. }
                | Self::IncludeNotFound { .. }
                | Self::IncludeCycle { .. }
                | Self::InvalidValue { .. }
        )
    }

    /// Check if the error reports an intentionally disabled command table.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildchain::Error;
    ///
    /// let err = Error::StatusBlocked {
    ///     command: "optee".into(),
    ///     status: "unsupported".into(),
    ///     document: "mp2".into(),
    /// };
    /// assert!(err.is_blocked());
    /// ```
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::StatusBlocked { .. })
    }
}
