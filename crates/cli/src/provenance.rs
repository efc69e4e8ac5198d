//! Provenance sidecar for batch runs: `<out-stem>.provenance.json`.
//!
//! Records which input (by content digest) produced which output, with the
//! resolution bound and the scored/failed counts, so a scores file can be
//! matched back to its shapes without rerunning.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::Summary;

/// Sidecar document written next to a batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidecar {
    /// `complexity` library version that produced the scores.
    pub version: String,
    pub input: PathBuf,
    /// `sha256:<hex>` of the raw input bytes.
    pub input_sha256: String,
    pub output: PathBuf,
    pub max_j: usize,
    pub scored: usize,
    pub failed: usize,
}

impl Sidecar {
    pub fn new(input: &Path, output: &Path, max_j: usize, summary: &Summary) -> Self {
        Self {
            version: complexity::VERSION.to_string(),
            input: input.to_path_buf(),
            input_sha256: summary.input_sha256.clone(),
            output: output.to_path_buf(),
            max_j,
            scored: summary.scored,
            failed: summary.failed,
        }
    }
}

/// Content digest in `sha256:<hex>` form.
pub fn digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("sha256:{:x}", hasher.finalize())
}

/// Write the sidecar next to `sidecar.output`; returns its path.
pub fn write_sidecar(sidecar: &Sidecar) -> Result<PathBuf> {
    let path = sidecar_path(&sidecar.output);
    let body = serde_json::to_vec_pretty(sidecar)?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("scores"));
    name.push(".provenance.json");
    output.with_file_name(name)
}
