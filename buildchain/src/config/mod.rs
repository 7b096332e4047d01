//! Configuration system for buildchain.
//!
//! Build descriptions are TOML documents layered through an `include`
//! pointer in their `[header]` table:
//!
//! ```toml
//! [header]
//! name = "test"
//! type = "core"
//!
//! [example]
//! exeCommand = ["_make", "optimization", "target", "BUILD_PLAT=", "buildDir"]
//! optimization = ""
//! target = "all"
//! buildDir = "../build"
//! ```
//!
//! # Precedence
//!
//! The loaded document comes first in the [`Chain`], followed by the
//! document it includes, and so on. Lookups scan the chain in order, so a
//! more specific document always shadows the documents it includes.
//!
//! # Examples
//!
//! ```no_run
//! use buildchain::config::ConfigLoader;
//! use std::path::Path;
//!
//! let chain = ConfigLoader::load_chain(Path::new("mp157f-dk2.toml")).unwrap();
//! for name in chain.command_names() {
//!     println!("{name}");
//! }
//! ```

pub mod chain;
pub mod loader;
pub mod schema;

pub use chain::Chain;
pub use loader::ConfigLoader;
pub use schema::{
    CommandTable, ConfigDocument, Header, TableValue, BUILD_FIELD, FLASH_FIELD, HEADER_TABLE,
    RESERVED_TABLE, SOURCE_FIELD, STATUS_FIELD,
};
