//! Toybox configuration, read from `toybox.toml` by default.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::arith::GLOBAL_VAL;
use crate::core::calc::MAX_CALC_N;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "toybox.toml";

/// Upper limit on how many random numbers a single run prints.
pub const MAX_RANDOM_COUNT: usize = 1_000;

/// Inputs for the fixed sequence (TOML).
///
/// Missing fields default to the values the sequence has always used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToyConfig {
    /// Values passed through `double_all`.
    pub values: Vec<i64>,

    /// Text to reverse.
    pub text: String,

    /// Input to `complex_calc`.
    pub calc_n: u32,

    /// File the probe tries to open.
    pub probe_path: PathBuf,

    pub arith: ArithConfig,

    pub random: RandomConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArithConfig {
    pub x: i64,
    pub y: i64,
    /// Constant added to every total.
    pub global: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RandomConfig {
    /// How many numbers to draw.
    pub count: usize,
    /// Exclusive upper bound of each draw.
    pub upper: u32,
    /// Fixed seed for reproducible draws. Unset means OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            x: 5,
            y: 10,
            global: GLOBAL_VAL,
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            count: 4,
            upper: 100,
            seed: None,
        }
    }
}

impl Default for ToyConfig {
    fn default() -> Self {
        Self {
            values: vec![1, 2, 3, 4, 5],
            text: "helloworld".to_string(),
            calc_n: 8,
            probe_path: PathBuf::from("nofile.txt"),
            arith: ArithConfig::default(),
            random: RandomConfig::default(),
        }
    }
}

impl ToyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.calc_n > MAX_CALC_N {
            return Err(anyhow!("calc_n must be <= {}", MAX_CALC_N));
        }
        if self.probe_path.as_os_str().is_empty() {
            return Err(anyhow!("probe_path must be non-empty"));
        }
        self.random.validate()
    }
}

impl RandomConfig {
    pub fn validate(&self) -> Result<()> {
        if self.upper == 0 {
            return Err(anyhow!("random.upper must be > 0"));
        }
        if self.count > MAX_RANDOM_COUNT {
            return Err(anyhow!("random.count must be <= {}", MAX_RANDOM_COUNT));
        }
        Ok(())
    }
}

/// Read and parse a config file without validating it.
///
/// A missing file yields `ToyConfig::default()`. Callers that apply overrides
/// validate afterwards.
pub fn read_config(path: &Path) -> Result<ToyConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "config missing, using defaults");
            return Ok(ToyConfig::default());
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    debug!(path = %path.display(), bytes = contents.len(), "parsing config");
    toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// [`read_config`] followed by [`ToyConfig::validate`].
pub fn load_config(path: &Path) -> Result<ToyConfig> {
    let cfg = read_config(path)?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Write the default config to `path`.
///
/// An existing file is left alone unless `force` is set. Returns whether the
/// file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, leaving it alone");
        return Ok(false);
    }
    write_config(path, &ToyConfig::default())?;
    Ok(true)
}

/// Validate, serialize and atomically replace `path`.
pub fn write_config(path: &Path, cfg: &ToyConfig) -> Result<()> {
    cfg.validate()?;
    let mut rendered = toml::to_string_pretty(cfg).context("serialize config toml")?;
    rendered.push('\n');
    debug!(path = %path.display(), bytes = rendered.len(), "writing config");
    replace_file(path, rendered.as_bytes())
}

/// Stage `contents` in a temp file next to `path`, then rename it into place.
fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    staged
        .write_all(contents)
        .with_context(|| format!("write temp file for {}", path.display()))?;
    staged
        .persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}
