//! Key lookup across the configuration chain.

use crate::config::Chain;
use crate::error::{Error, Result};

/// Resolves token keys with first-match-wins precedence.
///
/// # Examples
///
/// ```
/// use buildchain::config::{Chain, ConfigDocument};
/// use buildchain::KeyResolver;
///
/// let board = ConfigDocument::from_toml_str(
///     "[header]\nname = \"board\"\n[linux]\ntarget = \"zImage\"\n",
///     "board.toml",
/// )
/// .unwrap();
/// let base = ConfigDocument::from_toml_str(
///     "[header]\nname = \"base\"\n[linux]\ntarget = \"all\"\n",
///     "base.toml",
/// )
/// .unwrap();
/// let chain = Chain::new(vec![board, base]).unwrap();
///
/// assert_eq!(KeyResolver::resolve("target", "linux", &chain).unwrap(), "zImage");
/// ```
pub struct KeyResolver;

impl KeyResolver {
    /// Return the value of `key` from the first layer whose table `command`
    /// defines it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedKey`] if no layer defines `key` under
    /// `command`.
    pub fn resolve<'a>(key: &str, command: &'a str, chain: &'a Chain) -> Result<&'a str> {
        chain
            .tables(command)
            .find_map(|(_, table)| table.text(key))
            .ok_or_else(|| Error::UnresolvedKey {
                key: key.to_string(),
                command: command.to_string(),
                document: chain.root().name().to_string(),
            })
    }

    /// Like [`KeyResolver::resolve`], but a missing key is not an error.
    #[must_use]
    pub fn lookup<'a>(key: &str, command: &'a str, chain: &'a Chain) -> Option<&'a str> {
        chain.tables(command).find_map(|(_, table)| table.text(key))
    }
}
