//! Filesystem measurement: directory sizes, package ranking, manifest counts

/// Package-name classification table
pub mod classify;
/// Recursive directory size measurement
pub mod dir_size;
/// Declared-dependency counting from package.json
pub mod manifest;
/// Ranking of installed packages by size
pub mod packages;

pub use classify::describe_package;
pub use dir_size::{count_files, dependency_percent, measure_dir, DirMeasurement};
pub use manifest::declared_dependency_count;
pub use packages::{scan_packages, PackageEntry, PackageScan};
