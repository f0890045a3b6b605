//! Candidate file enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::debug;

use cedetect_core::errors::ScanError;

/// Enumerate `.go` files directly under the package directory.
///
/// Results are sorted by path so the first-match rule is reproducible
/// across runs and filesystems.
pub fn go_files(package_dir: &str) -> Result<Vec<PathBuf>, ScanError> {
    let pattern = format!("{package_dir}*.go");
    let entries = glob(&pattern).map_err(|e| ScanError::InvalidPattern {
        pattern: pattern.clone(),
        message: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => debug!(error = %e, "skipping unreadable glob entry"),
        }
    }
    files.sort();
    Ok(files)
}

/// Read one candidate file into memory; the analysis core never does IO.
pub fn read_source(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}
