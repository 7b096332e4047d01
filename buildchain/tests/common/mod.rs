//! Common test utilities for integration tests.
//!
//! This module provides a three-layer board description (family, SoC,
//! board) written into a temporary directory, along with the source
//! directories it points at.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Family layer: defines every token sequence.
pub const FAMILY_TOML: &str = r#"
[header]
name = "mp"
type = "family"

[tfa]
exeCommand = ["_make", "PLAT=", "plat", "target"]
plat = "generic"
target = "all"

[uboot]
exeCommand = ["_make", "defconfig", "_make", "DEVICE_TREE=", "deviceTree", "target"]
defconfig = "stm32mp15_defconfig"
target = "all"

[optee]
exeCommand = ["_make", "target"]
target = "all"

[linux]
exeCommand = ["_make", "ARCH=", "arch", "target", "DTB=", "_dtbDir_", "dtb"]
arch = "arm"
target = "zImage"
dtbDir = "st/"

[m4]
exeCommand = ["_cmake", "buildFlag", "buildDir"]
buildFlag = "-B"
buildDir = "../build/m4"
"#;

/// SoC layer: shadows the platform and disables OP-TEE.
pub const SOC_TOML: &str = r#"
[header]
name = "mp1"
type = "soc"
include = "mp.toml"

[tfa]
plat = "stm32mp1"

[uboot]

[optee]
status = "not supported on this SoC"

[linux]

[m4]
"#;

/// Builder for a temporary board description.
///
/// # Examples
///
/// ```no_run
/// # use common::BoardFixture;
/// let board = BoardFixture::new();
/// let chain = buildchain::ConfigLoader::load_chain(&board.board_path()).unwrap();
/// ```
#[allow(dead_code)]
pub struct BoardFixture {
    pub temp_dir: TempDir,
}

#[allow(dead_code)]
impl BoardFixture {
    /// Write the family, SoC and board layers plus their source directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let fixture = Self { temp_dir };

        fs::create_dir_all(fixture.root().join("src")).expect("Failed to create source dir");
        fs::create_dir_all(fixture.root().join("m4")).expect("Failed to create m4 dir");

        fixture.write("mp.toml", FAMILY_TOML);
        fixture.write("mp1.toml", SOC_TOML);
        fixture.write("mp157f-dk2.toml", &fixture.board_toml());
        fixture
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the board layer, the entry point of the chain.
    pub fn board_path(&self) -> PathBuf {
        self.root().join("mp157f-dk2.toml")
    }

    /// The board's default source directory, as assembled (trailing `/`).
    pub fn source(&self) -> String {
        format!("{}/", self.root().join("src").to_string_lossy())
    }

    /// A second existing directory, as assembled, for explicit sources.
    pub fn m4_source(&self) -> String {
        format!("{}/", self.root().join("m4").to_string_lossy())
    }

    /// Write a document into the fixture directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, contents).expect("Failed to write document");
        path
    }

    fn board_toml(&self) -> String {
        format!(
            r#"
[header]
name = "mp157f-dk2"
type = "board"
include = "mp1.toml"
source = '{src}'

[tfa]

[uboot]
deviceTree = "stm32mp157f-dk2"

[optee]

[linux]
dtb = "stm32mp157f-dk2.dtb"
flashCommand = ["_src_", "image"]
image = "arch/arm/boot/zImage"

[m4]
"#,
            src = self.root().join("src").to_string_lossy(),
        )
    }
}
