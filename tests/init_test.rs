//! Integration tests for `keynav init`
//!
//! - Creates a starter menu file at the --config path
//! - The starter file is valid TOML that passes `keynav check`
//! - Refuses to overwrite an existing file without --force
//! - Overwrites with --force

use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// Helper to run `keynav init` against an explicit menu path
fn run_init(menu_path: &std::path::Path, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_keynav"));
    cmd.arg("--config").arg(menu_path).arg("init");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute keynav init")
}

#[test]
fn test_init_creates_starter_menu() {
    let temp = assert_fs::TempDir::new().unwrap();
    let menu_file = temp.child("keynav.toml");

    let output = run_init(menu_file.path(), &[]);

    assert!(
        output.status.success(),
        "init should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    menu_file.assert(predicate::path::exists());
    menu_file.assert(predicate::str::contains("[[menu]]"));
}

#[test]
fn test_init_creates_missing_parent_directories() {
    let temp = assert_fs::TempDir::new().unwrap();
    let menu_file = temp.child("nested/config/keynav.toml");

    let output = run_init(menu_file.path(), &[]);

    assert!(output.status.success());
    menu_file.assert(predicate::path::exists());
}

#[test]
fn test_init_output_passes_check() {
    let temp = assert_fs::TempDir::new().unwrap();
    let menu_file = temp.child("keynav.toml");

    assert!(run_init(menu_file.path(), &[]).status.success());

    let check = Command::new(env!("CARGO_BIN_EXE_keynav"))
        .arg("--config")
        .arg(menu_file.path())
        .arg("check")
        .output()
        .expect("Failed to execute keynav check");
    assert!(
        check.status.success(),
        "starter menu should validate: {}",
        String::from_utf8_lossy(&check.stderr)
    );
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = assert_fs::TempDir::new().unwrap();
    let menu_file = temp.child("keynav.toml");
    menu_file.write_str("title = \"Mine\"\n").unwrap();

    let output = run_init(menu_file.path(), &[]);

    assert!(!output.status.success(), "init should refuse to overwrite");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"), "stderr: {stderr}");
    menu_file.assert(predicate::str::contains("Mine"));
}

#[test]
fn test_init_force_overwrites() {
    let temp = assert_fs::TempDir::new().unwrap();
    let menu_file = temp.child("keynav.toml");
    menu_file.write_str("title = \"Mine\"\n").unwrap();

    let output = run_init(menu_file.path(), &["--force"]);

    assert!(output.status.success());
    menu_file.assert(predicate::str::contains("[[menu]]"));
}
