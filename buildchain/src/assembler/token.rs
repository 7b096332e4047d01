//! Classification of command tokens.
//!
//! Every element of an `exeCommand`/`flashCommand` sequence is classified
//! into a [`Token`] before any text is emitted, so assembly only ever
//! dispatches on this closed set.

/// Prefix of the build-tool marker.
pub const BUILD_TOOL_PREFIX: &str = "_make";

/// Prefix of the configure-tool marker.
pub const CONFIGURE_TOOL_PREFIX: &str = "_cmake";

/// Prefix of the source-directory marker.
pub const SOURCE_MARKER: &str = "_src_";

/// Wrapping character of adjacency keys.
const ADJACENT_WRAP: char = '_';

/// Suffix of assignment-style tokens.
const ASSIGNMENT_SUFFIX: char = '=';

/// A classified command token.
///
/// # Examples
///
/// ```
/// use buildchain::assembler::Token;
///
/// assert_eq!(Token::classify("_make"), Token::BuildTool);
/// assert_eq!(Token::classify("_dtb_"), Token::AdjacentKey { literal: "_dtb_", key: "dtb" });
/// assert_eq!(Token::classify("BUILD_PLAT="), Token::Assignment("BUILD_PLAT="));
/// assert_eq!(Token::classify("target"), Token::Key("target"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Emits a parallel `make` invocation on the source directory.
    BuildTool,
    /// Emits a `cmake` configure invocation on the source directory.
    ConfigureTool,
    /// Emits the source directory itself.
    SourceDir,
    /// `_key_` (or a lone `_`): resolves `key` and glues the next piece of
    /// output to it.
    AdjacentKey {
        /// The token as written.
        literal: &'a str,
        /// The key name without the wrapping underscores.
        key: &'a str,
    },
    /// `NAME=`: emitted literally and glued to the next piece of output.
    Assignment(&'a str),
    /// A key resolved through the chain.
    Key(&'a str),
}

impl<'a> Token<'a> {
    /// Classify one token. Reserved markers take priority over the key forms.
    #[must_use]
    pub fn classify(literal: &'a str) -> Self {
        if literal.starts_with(BUILD_TOOL_PREFIX) {
            Self::BuildTool
        } else if literal.starts_with(CONFIGURE_TOOL_PREFIX) {
            Self::ConfigureTool
        } else if literal.starts_with(SOURCE_MARKER) {
            Self::SourceDir
        } else if literal.starts_with(ADJACENT_WRAP) && literal.ends_with(ADJACENT_WRAP) {
            // A lone `_` wraps an empty name
            let key = literal
                .strip_prefix(ADJACENT_WRAP)
                .and_then(|inner| inner.strip_suffix(ADJACENT_WRAP))
                .unwrap_or_default();
            Self::AdjacentKey { literal, key }
        } else if literal.ends_with(ASSIGNMENT_SUFFIX) {
            Self::Assignment(literal)
        } else {
            Self::Key(literal)
        }
    }

    /// The literal an override may replace; markers are never overridden.
    #[must_use]
    pub const fn overridable_literal(&self) -> Option<&'a str> {
        match *self {
            Self::BuildTool | Self::ConfigureTool | Self::SourceDir => None,
            Self::AdjacentKey { literal, .. } | Self::Assignment(literal) | Self::Key(literal) => {
                Some(literal)
            }
        }
    }
}
