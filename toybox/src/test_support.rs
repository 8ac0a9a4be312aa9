//! Test-only helpers for building configs and scratch workspaces.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::{DEFAULT_CONFIG_FILE, ToyConfig, write_config};

/// Default config whose probe points at `dir/name`, with an optional fixed seed.
pub fn config_with_probe(dir: &Path, name: &str, seed: Option<u64>) -> ToyConfig {
    let mut cfg = ToyConfig::default();
    cfg.probe_path = dir.join(name);
    cfg.random.seed = seed;
    cfg
}

/// Create a temp directory holding `toybox.toml` for `cfg`.
///
/// Returns the directory guard and the config path inside it.
pub fn workspace_with_config(cfg: &ToyConfig) -> Result<(TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create temp workspace")?;
    let path = temp.path().join(DEFAULT_CONFIG_FILE);
    write_config(&path, cfg)?;
    Ok((temp, path))
}
