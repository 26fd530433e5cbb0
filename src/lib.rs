#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! depsize library
//!
//! This library provides the core functionality for auditing the disk
//! footprint of a JavaScript project: measuring a fixed set of project
//! directories, ranking the packages installed under `node_modules`, and
//! assembling a Markdown report with a bounded size-trend history. It can be
//! used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Classifying package names against the built-in purpose table:
//!
//! ```
//! use depsize::scan::classify::describe_package;
//!
//! assert_eq!(describe_package("moment"), "date/time manipulation library");
//! assert_eq!(describe_package("some-internal-pkg"), "application dependency");
//! ```
//!
//! # Advanced Example: Percentage Arithmetic
//!
//! Percentages degrade to a fixed fallback instead of dividing by zero:
//!
//! ```
//! use depsize::scan::dir_size::{dependency_percent, FALLBACK_DEP_PERCENT};
//!
//! // 85 bytes of a 120 byte tree, floored
//! assert_eq!(dependency_percent(Some(120), Some(85)), 70);
//!
//! // Unmeasurable root falls back instead of erroring
//! assert_eq!(dependency_percent(None, Some(85)), FALLBACK_DEP_PERCENT);
//! assert_eq!(dependency_percent(Some(0), Some(85)), FALLBACK_DEP_PERCENT);
//! ```
//!
//! # Advanced Example: Two-slot Report Persistence
//!
//! Each run preserves the previous report as a `.bak` slot before
//! overwriting:
//!
//! ```
//! use depsize::report::store::ReportStore;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let project = TempDir::new().unwrap();
//! let store = ReportStore::new(project.path());
//!
//! store.write("# first run\n").unwrap();
//! store.write("# second run\n").unwrap();
//!
//! let backup = fs::read_to_string(project.path().join("dependency-report.md.bak")).unwrap();
//! assert!(backup.contains("first run"));
//! let current = fs::read_to_string(project.path().join("dependency-report.md")).unwrap();
//! assert!(current.contains("second run"));
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Report assembly, trend history and persistence
pub mod report;
/// Filesystem measurement and package ranking
pub mod scan;
