//! Test fixture helpers for creating fake JavaScript projects
//!
//! Provides utilities for setting up realistic project trees with a
//! node_modules directory of sized packages and a package.json manifest.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Creates an installed package directory of roughly `bytes` under
/// `node_modules`
pub fn install_package(project_root: &Path, name: &str, bytes: usize) -> anyhow::Result<PathBuf> {
    let pkg_dir = project_root.join("node_modules").join(name);
    fs::create_dir_all(&pkg_dir)?;
    fs::write(pkg_dir.join("index.js"), vec![b'x'; bytes])?;
    Ok(pkg_dir)
}

/// Creates a minimal project with a manifest and empty node_modules
///
/// # Returns
///
/// The TempDir for the project root - it must be kept alive
pub fn create_bare_project() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;

    fs::write(
        temp_dir.path().join("package.json"),
        r#"{
  "name": "fixture-project",
  "version": "1.0.0",
  "dependencies": {}
}
"#,
    )?;
    fs::create_dir(temp_dir.path().join("node_modules"))?;

    Ok(temp_dir)
}

/// Creates the end-to-end scenario project: three installed packages with
/// distinct sizes and a manifest declaring all three
///
/// Layout:
/// - `node_modules/moment` ~5 MB (known date library)
/// - `node_modules/webpack` ~3 MB (known bundler)
/// - `node_modules/some-pkg` ~1 MB (unknown name)
pub fn create_scenario_project() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(
        root.join("package.json"),
        r#"{
  "name": "scenario-project",
  "version": "1.0.0",
  "dependencies": {
    "moment": "^2.29.0",
    "webpack": "^5.90.0",
    "some-pkg": "^0.1.0"
  }
}
"#,
    )?;

    install_package(root, "moment", 5 * 1024 * 1024)?;
    install_package(root, "webpack", 3 * 1024 * 1024)?;
    install_package(root, "some-pkg", 1024 * 1024)?;

    // A couple of the other fixed directories so the overview table has
    // measured and unmeasured rows side by side
    fs::create_dir(root.join("src"))?;
    fs::write(root.join("src").join("app.js"), b"console.log('hi');\n")?;

    Ok(temp_dir)
}
