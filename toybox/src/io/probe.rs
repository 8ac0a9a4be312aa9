//! Best-effort file probe.
//!
//! Opening the file is attempted once. Any failure is logged at debug level
//! and replaced by [`FileProbe::Unavailable`]; it is never surfaced to the
//! caller.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

/// Outcome of [`probe_file`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileProbe {
    /// File opened; the handle was dropped immediately.
    Opened { path: PathBuf, len: u64 },
    /// Open failed for any reason.
    Unavailable,
}

impl fmt::Display for FileProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileProbe::Opened { path, .. } => write!(f, "{}", path.display()),
            FileProbe::Unavailable => f.write_str("<nil>"),
        }
    }
}

/// Try to open `path` for reading.
pub fn probe_file(path: &Path) -> FileProbe {
    debug!(path = %path.display(), "probing file");
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "probe failed, discarding error");
            return FileProbe::Unavailable;
        }
    };
    let len = file.metadata().map(|meta| meta.len()).unwrap_or(0);
    FileProbe::Opened {
        path: path.to_path_buf(),
        len,
    }
}
