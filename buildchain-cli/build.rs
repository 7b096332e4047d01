//! Build script for buildchain-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Arguments shared by `build` and `flash`.
fn run_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("command")
            .value_name("COMMAND")
            .required(true)
            .help("Component (command table) to resolve, or `all`"),
    )
    .arg(
        Arg::new("input-file")
            .short('i')
            .long("input-file")
            .value_name("FILE")
            .env("BUILDCHAIN_INPUT_FILE")
            .help("Entry document of the description"),
    )
    .arg(
        Arg::new("source")
            .short('s')
            .long("source")
            .value_name("DIR")
            .help("Source directory, overriding the configured one"),
    )
    .arg(
        Arg::new("override")
            .short('o')
            .long("override")
            .value_name("KEY:VALUE")
            .help("Replace the value of one token"),
    )
    .arg(
        Arg::new("jobs")
            .long("jobs")
            .value_name("N")
            .help("Fixed job count for make"),
    )
    .arg(
        Arg::new("format")
            .long("format")
            .value_parser(["text", "json", "yaml"])
            .default_value("text")
            .help("Output format"),
    )
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("buildchain")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve layered TOML build descriptions into build and flash commands")
        .long_about(
            "Follow the include chain of a board description and print the exact build or flash command of each component",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            run_args(
                Command::new("build")
                    .about("Print the build command of a component")
                    .long_about("Assemble the exeCommand sequence of a component, or of all of them"),
            ),
            run_args(
                Command::new("flash")
                    .about("Print the flash command of a component")
                    .long_about("Assemble the flashCommand sequence of a component, or of all of them"),
            ),
            Command::new("list")
                .about("List the command tables of a description")
                .long_about("Show each component with its run modes and whether a layer disables it"),
            Command::new("validate")
                .about("Validate a description")
                .long_about("Load a description and every document it includes, reporting the first error"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("buildchain.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
