//! Command-line override of a single token.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Separator between the key and the replacement text.
const SEPARATOR: char = ':';

/// A `key:value` substitution applied to one token during one assembly.
///
/// The replacement text is stored with a single leading space so it can be
/// emitted as is.
///
/// # Examples
///
/// ```
/// use buildchain::Override;
///
/// let ov: Override = "target: boot".parse().unwrap();
/// assert_eq!(ov.key(), "target");
/// assert_eq!(ov.replacement(), " boot");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    key: String,
    replacement: String,
}

impl Override {
    /// Build an override from its parts; both are trimmed.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.trim().to_string(),
            replacement: format!(" {}", value.trim()),
        }
    }

    /// Parse a `key:value` argument, splitting at the first `:`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOverride`] if the argument has no `:`.
    pub fn parse(arg: &str) -> Result<Self> {
        match arg.split_once(SEPARATOR) {
            Some((key, value)) => Ok(Self::new(key, value)),
            None => Err(Error::InvalidOverride {
                value: arg.to_string(),
                reason: format!("expected KEY{SEPARATOR}VALUE"),
            }),
        }
    }

    /// The token literal this override replaces.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The text emitted in place of the token, space-prefixed.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Whether this override targets `token`. An empty key matches nothing.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        !self.key.is_empty() && self.key == token
    }
}

impl FromStr for Override {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
