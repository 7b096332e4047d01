//! The ordered inheritance chain of configuration documents.

use crate::config::schema::{CommandTable, ConfigDocument};
use crate::error::{Error, Result};

/// Ordered documents, most specific first.
///
/// Index 0 is the document that was loaded explicitly; every later entry is
/// the parent named by the previous entry's `header.include`. A chain is
/// immutable once built and can be shared by any number of assembly calls.
///
/// # Examples
///
/// ```
/// use buildchain::config::{Chain, ConfigDocument};
///
/// let doc = ConfigDocument::from_toml_str("[header]\nname = \"mp1\"\n[linux]\n", "mp1.toml")
///     .unwrap();
/// let chain = Chain::new(vec![doc]).unwrap();
/// assert_eq!(chain.root().name(), "mp1");
/// assert_eq!(chain.command_names().collect::<Vec<_>>(), vec!["linux"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    documents: Vec<ConfigDocument>,
}

impl Chain {
    /// Wraps an already ordered list of documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChain`] if `documents` is empty, since every
    /// chain has a root document.
    pub fn new(documents: Vec<ConfigDocument>) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::EmptyChain);
        }
        Ok(Self { documents })
    }

    /// The most specific document.
    #[must_use]
    pub fn root(&self) -> &ConfigDocument {
        &self.documents[0]
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false: a chain holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents from most to least specific.
    pub fn documents(&self) -> impl Iterator<Item = &ConfigDocument> {
        self.documents.iter()
    }

    /// The table `command` of every layer that declares it, most specific
    /// first, paired with its owning document.
    pub fn tables<'a>(
        &'a self,
        command: &'a str,
    ) -> impl Iterator<Item = (&'a ConfigDocument, &'a CommandTable)> + 'a {
        self.documents
            .iter()
            .filter_map(move |doc| doc.table(command).map(|table| (doc, table)))
    }

    /// Names of the root document's command tables, in file order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.root().tables().map(CommandTable::name)
    }

    /// Checks that every layer declares the table `command`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] naming the first layer that lacks it.
    pub fn ensure_command(&self, command: &str) -> Result<()> {
        match self.documents.iter().find(|doc| doc.table(command).is_none()) {
            Some(doc) => Err(Error::UnknownCommand {
                command: command.to_string(),
                document: doc.name().to_string(),
            }),
            None => Ok(()),
        }
    }
}
