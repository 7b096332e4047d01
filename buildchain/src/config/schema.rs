//! Configuration document definitions.
//!
//! A document is a TOML file with one mandatory `[header]` table and any
//! number of command tables. Values are validated while the document is
//! built so that resolution never has to deal with ill-typed entries.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the mandatory header table.
pub const HEADER_TABLE: &str = "header";

/// Identifier reserved for the aggregate "every command table" request.
pub const RESERVED_TABLE: &str = "all";

/// Token sequence used in build mode.
pub const BUILD_FIELD: &str = "exeCommand";

/// Token sequence used in flash mode.
pub const FLASH_FIELD: &str = "flashCommand";

/// Field that disables a command table in one layer.
pub const STATUS_FIELD: &str = "status";

/// Header field naming the default source directory.
pub const SOURCE_FIELD: &str = "source";

/// The `[header]` table of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Declared name of the document, used in error messages.
    pub name: String,
    /// Informative document type (`core`, `board`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Path of the parent document, as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,
    /// Default source directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A value stored in a command table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TableValue {
    /// A plain string consumed during token resolution.
    Text(String),
    /// An ordered token sequence (`exeCommand` / `flashCommand`).
    Tokens(Vec<String>),
}

/// One command table: a buildable/flashable unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    name: String,
    entries: HashMap<String, TableValue>,
}

impl CommandTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Adds or replaces an entry, returning the table for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: TableValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// The table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the table defines `key`, whatever its type.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The string value of `key`, if any.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(TableValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// The token sequence stored under `field`, if any.
    #[must_use]
    pub fn tokens(&self, field: &str) -> Option<&[String]> {
        match self.entries.get(field) {
            Some(TableValue::Tokens(tokens)) => Some(tokens),
            _ => None,
        }
    }

    /// The `status` text disabling this table, if present.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.text(STATUS_FIELD)
    }
}

/// One parsed configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    path: PathBuf,
    header: Header,
    tables: Vec<CommandTable>,
}

impl ConfigDocument {
    /// Builds a document from parts, mostly useful in tests.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, header: Header, tables: Vec<CommandTable>) -> Self {
        Self {
            path: path.into(),
            header,
            tables,
        }
    }

    /// Parses and validates the TOML text of a document loaded from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed TOML, [`Error::MissingHeader`],
    /// [`Error::MissingName`], [`Error::ReservedName`], or
    /// [`Error::InvalidValue`] for structurally invalid documents.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildchain::config::ConfigDocument;
    ///
    /// let doc = ConfigDocument::from_toml_str(
    ///     "[header]\nname = \"test\"\n\n[example]\ntarget = \"all\"\n",
    ///     "test.toml",
    /// )
    /// .unwrap();
    /// assert_eq!(doc.name(), "test");
    /// assert_eq!(doc.table("example").unwrap().text("target"), Some("all"));
    /// ```
    pub fn from_toml_str(contents: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let root: toml::Table = toml::from_str(contents).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let header = Self::parse_header(&root, path)?;

        if root.contains_key(RESERVED_TABLE) {
            return Err(Error::ReservedName {
                path: path.to_path_buf(),
                name: RESERVED_TABLE.to_string(),
            });
        }

        let mut tables = Vec::new();
        for (name, value) in &root {
            if name == HEADER_TABLE {
                continue;
            }
            let toml::Value::Table(entries) = value else {
                return Err(Error::InvalidValue {
                    document: header.name.clone(),
                    table: name.clone(),
                    key: name.clone(),
                    reason: "top-level entries must be tables".to_string(),
                });
            };
            tables.push(Self::parse_table(&header.name, name, entries)?);
        }

        Ok(Self {
            path: path.to_path_buf(),
            header,
            tables,
        })
    }

    fn parse_header(root: &toml::Table, path: &Path) -> Result<Header> {
        let Some(value) = root.get(HEADER_TABLE) else {
            return Err(Error::MissingHeader {
                path: path.to_path_buf(),
            });
        };
        let document = path.display().to_string();
        let toml::Value::Table(header) = value else {
            return Err(Error::InvalidValue {
                document,
                table: HEADER_TABLE.to_string(),
                key: HEADER_TABLE.to_string(),
                reason: "expected a table".to_string(),
            });
        };

        let string_field = |key: &str| -> Result<Option<String>> {
            match header.get(key) {
                None => Ok(None),
                Some(toml::Value::String(s)) => Ok(Some(s.clone())),
                Some(other) => Err(Error::InvalidValue {
                    document: document.clone(),
                    table: HEADER_TABLE.to_string(),
                    key: key.to_string(),
                    reason: format!("expected a string, found {}", other.type_str()),
                }),
            }
        };

        let Some(name) = string_field("name")? else {
            return Err(Error::MissingName {
                path: path.to_path_buf(),
            });
        };

        Ok(Header {
            name,
            kind: string_field("type")?,
            include: string_field("include")?.map(PathBuf::from),
            source: string_field(SOURCE_FIELD)?,
        })
    }

    fn parse_table(document: &str, name: &str, entries: &toml::Table) -> Result<CommandTable> {
        let invalid = |key: &str, reason: String| Error::InvalidValue {
            document: document.to_string(),
            table: name.to_string(),
            key: key.to_string(),
            reason,
        };

        let mut table = CommandTable::new(name);
        for (key, value) in entries {
            let parsed = if key == BUILD_FIELD || key == FLASH_FIELD {
                let toml::Value::Array(items) = value else {
                    return Err(invalid(
                        key,
                        format!("expected an array of strings, found {}", value.type_str()),
                    ));
                };
                let tokens = items
                    .iter()
                    .map(|item| match item {
                        toml::Value::String(token) => Ok(token.clone()),
                        other => Err(invalid(
                            key,
                            format!("tokens must be strings, found {}", other.type_str()),
                        )),
                    })
                    .collect::<Result<Vec<_>>>()?;
                TableValue::Tokens(tokens)
            } else {
                match value {
                    toml::Value::String(text) => TableValue::Text(text.clone()),
                    other => {
                        return Err(invalid(
                            key,
                            format!("expected a string, found {}", other.type_str()),
                        ))
                    }
                }
            };
            table.entries.insert(key.clone(), parsed);
        }
        Ok(table)
    }

    /// Path the document was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Declared name of the document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Looks up a command table by name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&CommandTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Command tables in the order they appear in the file.
    pub fn tables(&self) -> impl Iterator<Item = &CommandTable> {
        self.tables.iter()
    }
}
