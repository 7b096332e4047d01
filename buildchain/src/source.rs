//! Selection and validation of the source directory.
//!
//! The source directory is the path emitted by the tool and source
//! markers. An explicit path (the CLI `--source` option) wins; otherwise the
//! `source` field of the root document's header is used. Keys named
//! `source` inside command tables are ordinary token keys and never select
//! the directory.

use std::path::{Path, PathBuf};

use crate::config::Chain;
use crate::error::{Error, Result};

/// Chooses and validates source directories.
pub struct SourceResolver;

impl SourceResolver {
    /// Pick the source path for `command` without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] if no candidate is available.
    pub fn select(explicit: Option<&str>, command: &str, chain: &Chain) -> Result<String> {
        explicit
            .or(chain.root().header().source.as_deref())
            .map(str::to_string)
            .ok_or_else(|| Error::MissingSource {
                command: command.to_string(),
            })
    }

    /// Check that `source` is an existing directory and append a trailing
    /// `/` if it lacks one. The path is otherwise emitted as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceDirectoryNotFound`] if `source` is not a
    /// directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildchain::SourceResolver;
    ///
    /// let dir = std::env::temp_dir();
    /// let source = SourceResolver::validate(dir.to_str().unwrap()).unwrap();
    /// assert!(source.ends_with('/'));
    /// ```
    pub fn validate(source: &str) -> Result<String> {
        if !Path::new(source).is_dir() {
            return Err(Error::SourceDirectoryNotFound {
                path: PathBuf::from(source),
            });
        }
        let mut source = source.to_string();
        if !source.ends_with('/') {
            source.push('/');
        }
        Ok(source)
    }

    /// [`SourceResolver::select`] followed by [`SourceResolver::validate`].
    ///
    /// # Errors
    ///
    /// See [`SourceResolver::select`] and [`SourceResolver::validate`].
    pub fn resolve(explicit: Option<&str>, command: &str, chain: &Chain) -> Result<String> {
        Self::validate(&Self::select(explicit, command, chain)?)
    }
}
