//! Configuration file loading and include resolution.
//!
//! This module loads a root document and follows its `header.include`
//! pointers until a document without one is reached.

use crate::config::chain::Chain;
use crate::config::schema::ConfigDocument;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration documents and builds their inheritance chain.
///
/// # Examples
///
/// ```no_run
/// use buildchain::config::ConfigLoader;
/// use std::path::Path;
///
/// let chain = ConfigLoader::load_chain(Path::new("mp157f-dk2.toml")).unwrap();
/// println!("Loaded {} configuration layers", chain.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the document at `path` and every document it includes.
    ///
    /// A relative `include` is resolved against the directory of the
    /// document that names it, or against the working directory when no
    /// such file exists there. Each document is recorded by canonical path,
    /// and reaching one a second time is reported as a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the root document cannot be read, any
    /// validation error from [`ConfigDocument::from_toml_str`] for the root,
    /// [`Error::IncludeNotFound`] if an included document cannot be read or
    /// parsed, and [`Error::IncludeCycle`] on a cyclic include.
    pub fn load_chain(path: &Path) -> Result<Chain> {
        let root = Self::load_file(path)?;
        let mut visited = HashSet::new();
        visited.insert(Self::identity(path)?);

        log::debug!("loaded '{}' from {}", root.name(), path.display());

        let mut documents = vec![root];
        loop {
            let current = &documents[documents.len() - 1];
            let Some(include) = current.header().include.clone() else {
                break;
            };
            let from = current.path().to_path_buf();
            let target = Self::include_path(&from, &include);

            let identity = Self::identity(&target).map_err(|e| Error::IncludeNotFound {
                path: target.clone(),
                from: from.clone(),
                reason: e.to_string(),
            })?;
            if !visited.insert(identity) {
                return Err(Error::IncludeCycle { path: target });
            }

            let document = Self::load_file(&target)
                .map_err(|e| Self::include_error(e, &target, &from))?;
            log::debug!(
                "'{}' includes '{}' ({})",
                documents[documents.len() - 1].name(),
                document.name(),
                target.display()
            );
            documents.push(document);
        }

        Chain::new(documents)
    }

    /// Load and validate a single document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or the validation
    /// error describing why the contents are not a valid document.
    pub fn load_file(path: &Path) -> Result<ConfigDocument> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", path.display()),
            ))
        })?;
        ConfigDocument::from_toml_str(&contents, path)
    }

    /// Resolve an include target. A relative path is looked up next to the
    /// including document first, then against the working directory.
    fn include_path(from: &Path, include: &Path) -> PathBuf {
        if include.is_absolute() {
            return include.to_path_buf();
        }
        if let Some(dir) = from.parent() {
            let beside = dir.join(include);
            if beside.exists() {
                return beside;
            }
        }
        include.to_path_buf()
    }

    fn identity(path: &Path) -> Result<PathBuf> {
        Ok(fs::canonicalize(path)?)
    }

    /// Structural errors inside an included document keep their own kind;
    /// failing to open or parse it becomes an include error.
    fn include_error(err: Error, target: &Path, from: &Path) -> Error {
        match err {
            Error::Io(e) => Error::IncludeNotFound {
                path: target.to_path_buf(),
                from: from.to_path_buf(),
                reason: e.to_string(),
            },
            Error::Parse { message, .. } => Error::IncludeNotFound {
                path: target.to_path_buf(),
                from: from.to_path_buf(),
                reason: message,
            },
            other => other,
        }
    }
}
