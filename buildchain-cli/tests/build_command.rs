//! Integration tests for the `build` and `flash` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_build_single_component() {
    let env = TestEnv::new();
    let stdout = env.resolve("build", "tfa");
    assert_eq!(
        stdout,
        format!(" make -j2 -C {} PLAT=stm32mp1 all \n", env.source())
    );
}

#[test]
fn test_flash_single_component() {
    let env = TestEnv::new();
    let stdout = env.resolve("flash", "linux");
    assert_eq!(stdout, format!(" {}arch/arm/boot/zImage \n", env.source()));
}

#[test]
fn test_default_job_count_is_shell_arithmetic() {
    let env = TestEnv::new();
    env.command()
        .args(["build", "tfa", "-i"])
        .arg(env.board())
        .assert()
        .success()
        .stdout(predicate::str::contains("make -j$(($(nproc) - 1)) -C"));
}

#[test]
fn test_input_file_from_environment() {
    let env = TestEnv::new();
    env.command()
        .env("BUILDCHAIN_INPUT_FILE", env.board())
        .args(["build", "tfa", "--jobs", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("make -j3"));
}

#[test]
fn test_override_replaces_value() {
    let env = TestEnv::new();
    env.command()
        .args(["build", "tfa", "--jobs", "2", "-o", "target: bl2 ", "-i"])
        .arg(env.board())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("PLAT=stm32mp1 bl2 \n"));
}

#[test]
fn test_malformed_override_is_invalid_argument() {
    let env = TestEnv::new();
    env.command()
        .args(["build", "tfa", "-o", "target", "-i"])
        .arg(env.board())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_explicit_source_directory() {
    let env = TestEnv::new();
    let other = env.create_dir("other");
    env.command()
        .args(["build", "tfa", "--jobs", "2", "-s"])
        .arg(&other)
        .arg("-i")
        .arg(env.board())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "-C {}/ ",
            other.to_string_lossy()
        )));
}

#[test]
fn test_missing_source_directory() {
    let env = TestEnv::new();
    env.command()
        .args(["build", "tfa", "-s"])
        .arg(env.path().join("missing"))
        .arg("-i")
        .arg(env.board())
        .assert()
        .code(6)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_blocked_component_exits_with_semantic_failure() {
    let env = TestEnv::new();
    env.command()
        .args(["build", "optee", "-i"])
        .arg(env.board())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("secure OS disabled on this board"))
        .stderr(predicate::str::contains("dk2"));
}

#[test]
fn test_underscore_key_warns_but_succeeds() {
    let env = TestEnv::new();
    env.command()
        .args(["build", "linux", "--jobs", "2", "-i"])
        .arg(env.board())
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" zImage \n"))
        .stderr(predicate::str::contains("WARN:"));
}

#[test]
fn test_warning_printed_before_later_key_fails() {
    let env = TestEnv::new();
    let path = env.write(
        "broken.toml",
        &format!(
            "[header]\nname = \"broken\"\nsource = '{}'\n\n[x]\nexeCommand = [\"build_dir\", \"missing\"]\nbuild_dir = \"out\"\n",
            env.path().join("src").to_string_lossy()
        ),
    );
    env.command()
        .args(["build", "x", "-i"])
        .arg(path)
        .assert()
        .code(6)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("WARN:"))
        .stderr(predicate::str::contains("build_dir"))
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_auto_job_count() {
    let env = TestEnv::new();
    env.command()
        .args(["build", "tfa", "--jobs", "auto", "-i"])
        .arg(env.board())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^ make -j[0-9]+ -C ").unwrap());
}

#[test]
fn test_invalid_job_count() {
    let env = TestEnv::new();
    env.command()
        .args(["build", "tfa", "--jobs", "many", "-i"])
        .arg(env.board())
        .assert()
        .code(2);
}

#[test]
fn test_quiet_suppresses_warnings() {
    let env = TestEnv::new();
    env.command()
        .args(["--quiet", "build", "linux", "-i"])
        .arg(env.board())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_build_all_skips_blocked() {
    let env = TestEnv::new();
    let src = env.source();
    env.command()
        .args(["build", "all", "--jobs", "2", "-i"])
        .arg(env.board())
        .assert()
        .success()
        .stdout(format!(
            " make -j2 -C {src} PLAT=stm32mp1 all \n make -j2 -C {src} zImage \n"
        ));
}

#[test]
fn test_flash_all_reports_failures() {
    let env = TestEnv::new();
    env.command()
        .args(["flash", "all", "-i"])
        .arg(env.board())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("arch/arm/boot/zImage"))
        .stderr(predicate::str::contains("flashCommand not found for 'tfa'"))
        .stderr(predicate::str::contains("1 of 3 flash commands failed"));
}

#[test]
fn test_json_output() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["build", "tfa", "--jobs", "2", "--format", "json", "-i"])
        .arg(env.board())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["command"], "tfa");
    assert_eq!(parsed[0]["mode"], "build");
    assert_eq!(parsed[0]["source"], env.source());
}
