//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - A two-layer board description with a source tree
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// SoC layer of the default description.
const SOC_TOML: &str = r#"
[header]
name = "mp1"
type = "soc"

[tfa]
exeCommand = ["_make", "PLAT=", "plat", "target"]
plat = "stm32mp1"
target = "all"

[optee]
exeCommand = ["_make", "target"]
target = "all"

[linux]
exeCommand = ["_make", "target_name"]
target_name = "zImage"
flashCommand = ["_src_", "image"]
image = "arch/arm/boot/zImage"
"#;

/// Test environment with an isolated description.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - A `src/` directory used as the board's default source
    /// - `mp1.toml`, the SoC layer
    /// - `board.toml`, the board layer including `mp1.toml`
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let env = Self {
            temp_dir,
            temp_path,
        };

        env.create_dir("src");
        env.write("mp1.toml", SOC_TOML);
        env.write(
            "board.toml",
            &format!(
                r#"
[header]
name = "dk2"
type = "board"
include = "mp1.toml"
source = '{}'

[tfa]

[optee]
status = "secure OS disabled on this board"

[linux]
"#,
                env.temp_path.join("src").to_string_lossy()
            ),
        );
        env
    }

    /// Get a bare command builder with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("buildchain").expect("Failed to find buildchain binary");
        cmd.env_remove("BUILDCHAIN_INPUT_FILE")
            .env_remove("BUILDCHAIN_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the board layer.
    pub fn board(&self) -> PathBuf {
        self.temp_path.join("board.toml")
    }

    /// The board's source directory as assembled (trailing `/`).
    pub fn source(&self) -> String {
        format!("{}/", self.temp_path.join("src").to_string_lossy())
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file into the test environment.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run `buildchain <mode> <component>` against the board and return stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn resolve(&self, mode: &str, component: &str) -> String {
        let output = self
            .command()
            .arg(mode)
            .arg(component)
            .arg("-i")
            .arg(self.board())
            .arg("--jobs")
            .arg("2")
            .output()
            .expect("Failed to run buildchain");

        assert!(
            output.status.success(),
            "{mode} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
