use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory holding a fake compiled-output tree.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create {parent:?}: {e}"));
        }
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
        path
    }

    #[allow(dead_code)]
    pub fn read(&self, rel: &str) -> String {
        let path = self.path().join(rel);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
    }

    /// Five `.js` candidates (two with alias references) plus non-candidates that also
    /// contain the pattern.
    #[allow(dead_code)]
    pub fn with_dist_tree(prefix: &str) -> Self {
        let ws = Self::new(prefix);
        ws.create_file("dist/a.js", "const x = require(\"~/util\")");
        ws.create_file("dist/b.js", "const fs = require(\"fs\");\n");
        ws.create_file("dist/util.js", "module.exports = {};\n");
        ws.create_file("dist/sub/c.js", "exports.c = 1;\n");
        ws.create_file("dist/sub/dir/b.js", "require(\"~/lib\")");
        ws.create_file("dist/sub/dir/b.js.map", "{\"sources\":[\"require(\\\"~/lib\\\")\"]}");
        ws.create_file("dist/module.map", "require(\"~/lib\")");
        ws.create_file("dist/module.ts", "require(\"~/lib\")");
        ws
    }
}
