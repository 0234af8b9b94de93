use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for ritual, isolated from the user's config and log settings
pub fn ritual() -> Command {
    let mut cmd = cargo_bin_cmd!("ritual");
    cmd.env("RITUAL_CONFIG_DIR", std::env::temp_dir().join("ritual-tests-no-config"))
        .env_remove("RITUAL_LOG")
        .env_remove("RITUAL_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Write graph text into `dir` and return its path
#[allow(dead_code)]
pub fn write_graph(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

/// Write a config.toml into `dir` and return its path
#[allow(dead_code)]
pub fn write_config(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, text).unwrap();
    path
}
