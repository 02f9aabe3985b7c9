//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config file holding the built-in defaults
pub fn default_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/default.yaml")
}

/// Helper to get a gentol command isolated from the caller's environment
pub fn gentol() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("gentol"));
    cmd.env_remove("GENTOL_GRADE")
        .env_remove("RUST_LOG")
        .env("GENTOL_CONFIG", default_config());
    cmd
}

/// Helper to write a config file into a temp directory
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, content).unwrap();
    (tmp, path)
}
