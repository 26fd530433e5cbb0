//! Current/backup report slots
//!
//! Two-slot persistence: `dependency-report.md` is the current slot and
//! `dependency-report.md.bak` the previous one. Each run reads the current
//! slot's trend rows, moves the current document into the backup slot, then
//! writes the new document. The backup is itself overwritten every run, so
//! history is bounded to the last successful run.
//!
//! Invocation is assumed single-operator and non-concurrent; no locking is
//! performed. Write failures here are the only fatal conditions in a run.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::infra::{FileSystem, RealFileSystem};

/// Current report slot file name
pub const REPORT_FILE: &str = "dependency-report.md";

/// Previous report slot file name
pub const BACKUP_FILE: &str = "dependency-report.md.bak";

/// Errors that can occur while persisting the report
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to move the previous report into the backup slot
    #[error("Failed to back up previous report to {path}")]
    Backup {
        /// Backup slot path
        path: PathBuf,
        #[source]
        /// IO error source
        source: io::Error,
    },

    /// Failed to write the new report
    #[error("Failed to write report to {path}")]
    Write {
        /// Current slot path
        path: PathBuf,
        #[source]
        /// IO error source
        source: io::Error,
    },
}

/// Manages the current and backup report slots for a project root
pub struct ReportStore<FS: FileSystem = RealFileSystem> {
    report_path: PathBuf,
    backup_path: PathBuf,
    fs: FS,
}

impl ReportStore<RealFileSystem> {
    /// Create a store rooted at `project_root`
    pub fn new(project_root: &Path) -> Self {
        Self::with_fs(project_root, RealFileSystem)
    }
}

impl<FS: FileSystem> ReportStore<FS> {
    /// Create a store with a custom filesystem implementation
    pub fn with_fs(project_root: &Path, fs: FS) -> Self {
        Self {
            report_path: project_root.join(REPORT_FILE),
            backup_path: project_root.join(BACKUP_FILE),
            fs,
        }
    }

    /// Path of the current report slot
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Contents of the current slot from the previous run, if any.
    ///
    /// Unreadable contents are treated the same as a first run.
    pub fn previous_report(&self) -> Option<String> {
        self.fs.read_to_string(&self.report_path).ok()
    }

    /// Persist a new report document.
    ///
    /// Copies the current slot into the backup slot first (when a current
    /// report exists), then overwrites the current slot.
    pub fn write(&self, contents: &str) -> Result<(), StoreError> {
        if self.fs.metadata(&self.report_path).is_ok() {
            self.fs
                .copy(&self.report_path, &self.backup_path)
                .map_err(|source| StoreError::Backup {
                    path: self.backup_path.clone(),
                    source,
                })?;
        }

        self.fs
            .write(&self.report_path, contents)
            .map_err(|source| StoreError::Write {
                path: self.report_path.clone(),
                source,
            })?;

        Ok(())
    }
}
