// tests/integration/end_to_end.rs
use std::fs;

use fix_paths::app;
use fix_paths_domain::{config::FixConfig, options::WriteMode};
use fix_paths_shared_kernel::{FixPathsError, InfrastructureError};

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn config_for(ws: &TempWorkspace) -> FixConfig {
    FixConfig::new(ws.path().join("dist")).expect("default config builds")
}

#[test]
fn rewrites_by_depth_and_reports_counts() {
    let ws = TempWorkspace::with_dist_tree("e2e_depth");
    let summary = app::run(&config_for(&ws)).expect("run succeeds");

    assert_eq!(summary.scanned, 5);
    assert_eq!(summary.changed_count(), 2);
    assert_eq!(summary.message(), "Fixed 2 files (of 5).");
    assert_eq!(ws.read("dist/a.js"), "const x = require(\"./util\")");
    assert_eq!(ws.read("dist/sub/dir/b.js"), "require(\"../../lib\")");
}

#[test]
fn files_without_references_are_byte_identical() {
    let ws = TempWorkspace::with_dist_tree("e2e_identical");
    let before = fs::metadata(ws.path().join("dist/b.js")).unwrap().modified().unwrap();
    app::run(&config_for(&ws)).expect("run succeeds");

    assert_eq!(ws.read("dist/b.js"), "const fs = require(\"fs\");\n");
    assert_eq!(ws.read("dist/sub/c.js"), "exports.c = 1;\n");
    let after = fs::metadata(ws.path().join("dist/b.js")).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[test]
fn non_candidate_extensions_are_left_alone() {
    let ws = TempWorkspace::with_dist_tree("e2e_ext");
    app::run(&config_for(&ws)).expect("run succeeds");

    assert_eq!(ws.read("dist/module.map"), "require(\"~/lib\")");
    assert_eq!(ws.read("dist/module.ts"), "require(\"~/lib\")");
    assert!(ws.read("dist/sub/dir/b.js.map").contains("~/lib"));
}

#[test]
fn second_run_is_a_no_op() {
    let ws = TempWorkspace::with_dist_tree("e2e_idem");
    let config = config_for(&ws);
    app::run(&config).expect("first run succeeds");
    let a = ws.read("dist/a.js");

    let summary = app::run(&config).expect("second run succeeds");
    assert_eq!(summary.message(), "No files modified (of 5).");
    assert_eq!(ws.read("dist/a.js"), a);
}

#[test]
fn single_change_uses_singular_wording() {
    let ws = TempWorkspace::new("e2e_single");
    ws.create_file("dist/only.js", "require(\"~/x\"); require(\"~/y\");");
    ws.create_file("dist/other.js", "");

    let summary = app::run(&config_for(&ws)).expect("run succeeds");
    assert_eq!(summary.message(), "Fixed 1 file (of 2).");
    assert_eq!(summary.occurrences, 2);
    assert_eq!(ws.read("dist/only.js"), "require(\"./x\"); require(\"./y\");");
}

#[test]
fn dry_run_writes_nothing() {
    let ws = TempWorkspace::with_dist_tree("e2e_dry");
    let mut config = config_for(&ws);
    config.dry_run = true;

    let summary = app::run(&config).expect("run succeeds");
    assert_eq!(summary.message(), "Would fix 2 files (of 5).");
    assert_eq!(ws.read("dist/a.js"), "const x = require(\"~/util\")");
}

#[test]
fn atomic_mode_rewrites_the_same_way() {
    let ws = TempWorkspace::with_dist_tree("e2e_atomic");
    let mut config = config_for(&ws);
    config.write_mode = WriteMode::Atomic;

    app::run(&config).expect("run succeeds");
    assert_eq!(ws.read("dist/sub/dir/b.js"), "require(\"../../lib\")");
    let leftovers: Vec<_> = fs::read_dir(ws.path().join("dist/sub/dir"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[test]
fn missing_root_is_a_directory_read_error() {
    let ws = TempWorkspace::new("e2e_missing");
    let err = app::run(&config_for(&ws)).unwrap_err();

    let fix_err = err.downcast_ref::<FixPathsError>().expect("structured error");
    assert!(matches!(fix_err.infrastructure(), Some(InfrastructureError::DirectoryRead { .. })));
}
