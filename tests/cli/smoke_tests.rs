use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn fix_paths() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fix_paths"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    fix_paths()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fix_paths"));
}

#[test]
fn no_arguments_fix_dist_in_working_directory() {
    let ws = TempWorkspace::with_dist_tree("cli_default");
    fix_paths()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout("Fixed 2 files (of 5).\n");

    assert_eq!(ws.read("dist/a.js"), "const x = require(\"./util\")");
    assert_eq!(ws.read("dist/sub/dir/b.js"), "require(\"../../lib\")");
    assert_eq!(ws.read("dist/module.ts"), "require(\"~/lib\")");
}

#[test]
fn second_invocation_modifies_nothing() {
    let ws = TempWorkspace::with_dist_tree("cli_idem");
    fix_paths().current_dir(ws.path()).assert().success();
    fix_paths()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout("No files modified (of 5).\n");
}

#[test]
fn singular_wording_for_one_file() {
    let ws = TempWorkspace::new("cli_single");
    ws.create_file("dist/a.js", "require(\"~/x\")");
    fix_paths()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout("Fixed 1 file (of 1).\n");
}

#[test]
fn explicit_root_and_dry_run() {
    let ws = TempWorkspace::with_dist_tree("cli_dry");
    fix_paths()
        .arg(ws.path().join("dist"))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout("Would fix 2 files (of 5).\n");

    assert_eq!(ws.read("dist/a.js"), "const x = require(\"~/util\")");
}

#[test]
fn json_summary() {
    let ws = TempWorkspace::with_dist_tree("cli_json");
    let output = fix_paths()
        .current_dir(ws.path())
        .args(["--format", "json"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["scanned"], 5);
    assert_eq!(value["changed"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["message"], "Fixed 2 files (of 5).");
}

#[test]
fn missing_dist_fails_with_diagnostics() {
    let ws = TempWorkspace::new("cli_missing");
    fix_paths()
        .current_dir(ws.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("Application Error").and(predicate::str::contains("dist")),
        );
}

#[test]
fn empty_extension_is_rejected() {
    let ws = TempWorkspace::with_dist_tree("cli_bad_ext");
    fix_paths()
        .current_dir(ws.path())
        .args(["--ext", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--ext"));
}
