//! Ranking of installed packages by on-disk size
//!
//! Lists the immediate children of the dependency directory, measures each
//! recursively, and keeps the heaviest entries for the report.

use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::classify::describe_package;
use super::dir_size::{count_files, measure_dir};

/// Number of ranked entries retained for the report
pub const TOP_PACKAGES: usize = 10;

/// One installed package with its measured size and purpose
#[derive(Debug, Clone, Serialize)]
pub struct PackageEntry {
    /// Package directory name
    pub name: String,
    /// Recursive size in bytes
    pub size_bytes: u64,
    /// Purpose description from the classification table
    pub purpose: &'static str,
}

/// Result of scanning a dependency directory
#[derive(Debug, Clone, Serialize)]
pub struct PackageScan {
    /// Heaviest packages, descending by size, at most [`TOP_PACKAGES`]
    pub entries: Vec<PackageEntry>,
    /// Total number of immediate children (installed package count)
    pub total_packages: usize,
    /// Total recursive file count of the dependency directory
    pub total_files: u64,
}

impl PackageScan {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            total_packages: 0,
            total_files: 0,
        }
    }

    /// True when no dependency analysis is available (missing or empty
    /// dependency directory)
    pub fn is_empty(&self) -> bool {
        self.total_packages == 0
    }
}

/// Scan `deps_dir` and rank its immediate children by recursive size.
///
/// A missing or empty directory yields an empty scan rather than an error.
/// Hidden (dot-prefixed) entries such as `.bin` are installer plumbing, not
/// dependencies, and are skipped.
pub fn scan_packages(deps_dir: &Path) -> PackageScan {
    let entries = match fs::read_dir(deps_dir) {
        Ok(entries) => entries,
        Err(_) => {
            debug!("scan_packages: {} not readable", deps_dir.display());
            return PackageScan::empty();
        }
    };

    let mut packages: Vec<PackageEntry> = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let size_bytes = measure_dir(&entry.path()).unwrap_or(0);
        packages.push(PackageEntry {
            purpose: describe_package(&name),
            name,
            size_bytes,
        });
    }

    let total_packages = packages.len();
    packages.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes).then(a.name.cmp(&b.name)));
    packages.truncate(TOP_PACKAGES);

    PackageScan {
        entries: packages,
        total_packages,
        total_files: count_files(deps_dir),
    }
}
