//! Shared test utilities for stylekit integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write configuration fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - `STYLEKIT_CONFIG` and `STYLEKIT_ENV` are cleared so the host cannot leak in.
//! - Fixture directories are removed when the returned `TempDir` drops.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// The pipeline configuration the tool was built around.
pub const UPSTREAM_CONFIG: &str = r##"{
    "content": ["./templates/**/*.html", "./static/js/**/*.js", "./**/*.py"],
    "theme": {
        "extend": {
            "colors": { "primary": "#00ed64", "primary-focus": "#00d95a" }
        }
    },
    "plugins": ["daisyui"],
    "daisyui": {
        "themes": ["light", "dark", "cupcake", "synthwave"],
        "base": true,
        "styled": true,
        "utils": true,
        "logs": true,
        "rtl": false
    }
}"##;

/// Returns a hermetic `stylekit` command for integration testing.
pub fn stylekit_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("stylekit");
    cmd.env_remove("STYLEKIT_CONFIG")
        .env_remove("STYLEKIT_ENV")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a temporary directory holding the given files.
pub fn fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).expect("failed to write fixture");
    }
    dir
}

/// Path of a file inside a fixture directory.
pub fn path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
