//! Detection of command tables disabled with a `status` field.

use crate::config::Chain;
use crate::error::{Error, Result};

/// Checks whether a command table is blocked somewhere in the chain.
pub struct StatusChecker;

impl StatusChecker {
    /// Scan the chain in order; the first layer whose table `command`
    /// carries a `status` field blocks the command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatusBlocked`] with the status text and the declared
    /// name of the layer that set it.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildchain::config::{Chain, ConfigDocument};
    /// use buildchain::StatusChecker;
    ///
    /// let doc = ConfigDocument::from_toml_str(
    ///     "[header]\nname = \"mp2\"\n[optee]\nstatus = \"not supported\"\n",
    ///     "mp2.toml",
    /// )
    /// .unwrap();
    /// let chain = Chain::new(vec![doc]).unwrap();
    /// assert!(StatusChecker::check("optee", &chain).unwrap_err().is_blocked());
    /// ```
    pub fn check(command: &str, chain: &Chain) -> Result<()> {
        match chain
            .tables(command)
            .find_map(|(doc, table)| table.status().map(|status| (doc, status)))
        {
            Some((doc, status)) => Err(Error::StatusBlocked {
                command: command.to_string(),
                status: status.to_string(),
                document: doc.name().to_string(),
            }),
            None => Ok(()),
        }
    }
}
