//! Recursive directory size measurement
//!
//! Measurements never fail: a missing path yields `None` (the unavailable
//! sentinel) and unreadable entries are skipped. Downstream consumers render
//! the sentinel as placeholder text and treat it as zero in percentage
//! arithmetic.

use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Percentage reported when either side of the dependency/root ratio is
/// unavailable or the root measures zero bytes.
pub const FALLBACK_DEP_PERCENT: u64 = 0;

/// A single measured directory, labelled for report output
#[derive(Debug, Clone, Serialize)]
pub struct DirMeasurement {
    /// Human-readable label (e.g. "node_modules")
    pub label: String,
    /// Recursive size in bytes; `None` when the path does not exist
    pub size_bytes: Option<u64>,
}

impl DirMeasurement {
    /// Measure `path` and record it under `label`
    pub fn take(label: &str, path: &Path) -> Self {
        Self {
            label: label.to_string(),
            size_bytes: measure_dir(path),
        }
    }
}

/// Compute the total recursive size of `path` in bytes.
///
/// Returns `None` when the path does not exist. Entries that cannot be read
/// (permissions, races with concurrent deletion) are skipped rather than
/// failing the whole measurement.
///
/// # Examples
///
/// ```
/// use depsize::scan::dir_size::measure_dir;
/// use std::path::Path;
///
/// assert_eq!(measure_dir(Path::new("/no/such/directory")), None);
/// ```
pub fn measure_dir(path: &Path) -> Option<u64> {
    if !path.exists() {
        debug!("measure_dir: {} does not exist", path.display());
        return None;
    }
    Some(recursive_size(path))
}

fn recursive_size(path: &Path) -> u64 {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        // Symlink targets are not followed; counting the link itself avoids
        // double-counting and cycles.
        Ok(meta) if meta.is_symlink() => meta.len(),
        Ok(meta) if meta.is_dir() => {
            let mut total = 0u64;
            if let Ok(entries) = fs::read_dir(path) {
                for entry in entries.flatten() {
                    total += recursive_size(&entry.path());
                }
            }
            total
        }
        _ => 0,
    }
}

/// Count all files under `path` recursively.
///
/// Returns 0 for a missing path. Symlinks count as files and are not
/// followed.
pub fn count_files(path: &Path) -> u64 {
    let mut total = 0u64;
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            match entry.file_type() {
                Ok(ft) if ft.is_dir() => total += count_files(&entry.path()),
                Ok(_) => total += 1,
                Err(_) => {}
            }
        }
    }
    total
}

/// Share of the root tree occupied by the dependency directory, floored to
/// a whole percent.
///
/// Falls back to [`FALLBACK_DEP_PERCENT`] when the root is unmeasured or
/// zero-sized, or when the dependency directory is unmeasured.
///
/// # Examples
///
/// ```
/// use depsize::scan::dir_size::{dependency_percent, FALLBACK_DEP_PERCENT};
///
/// assert_eq!(dependency_percent(Some(200), Some(100)), 50);
/// assert_eq!(dependency_percent(Some(3), Some(1)), 33); // floored
/// assert_eq!(dependency_percent(Some(0), Some(1)), FALLBACK_DEP_PERCENT);
/// assert_eq!(dependency_percent(None, None), FALLBACK_DEP_PERCENT);
/// ```
pub fn dependency_percent(root: Option<u64>, deps: Option<u64>) -> u64 {
    match (root, deps) {
        (Some(r), Some(d)) if r > 0 => ((100u128 * d as u128) / r as u128) as u64,
        _ => FALLBACK_DEP_PERCENT,
    }
}
