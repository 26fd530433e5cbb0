//! Declared-dependency counting from package.json
//!
//! Counts the keys of the `dependencies` and `devDependencies` tables via a
//! structural JSON parse. A missing or malformed manifest degrades to a
//! count of 0 so the rest of the report still renders.

use log::warn;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Manifest file name looked up in the project root
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    dependencies: HashMap<String, Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, Value>,
}

/// Count the dependencies declared in the manifest at `manifest_path`.
///
/// Counts runtime and dev dependencies together. Returns 0 when the file is
/// missing or cannot be parsed.
///
/// # Examples
///
/// ```
/// use depsize::scan::manifest::declared_dependency_count;
/// use std::path::Path;
///
/// assert_eq!(declared_dependency_count(Path::new("/no/such/package.json")), 0);
/// ```
pub fn declared_dependency_count(manifest_path: &Path) -> usize {
    let contents = match fs::read_to_string(manifest_path) {
        Ok(c) => c,
        Err(_) => {
            warn!(
                "manifest {} not readable; declared dependency count defaults to 0",
                manifest_path.display()
            );
            return 0;
        }
    };

    match serde_json::from_str::<Manifest>(&contents) {
        Ok(manifest) => manifest.dependencies.len() + manifest.dev_dependencies.len(),
        Err(e) => {
            warn!(
                "manifest {} did not parse ({}); declared dependency count defaults to 0",
                manifest_path.display(),
                e
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_declared_count_missing_manifest_is_zero() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            declared_dependency_count(&temp.path().join(MANIFEST_FILE)),
            0
        );
    }

    #[test]
    fn test_declared_count_reads_both_sections() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join(MANIFEST_FILE);
        fs::write(
            &manifest,
            r#"{
  "name": "fixture",
  "version": "1.0.0",
  "dependencies": {
    "moment": "^2.29.0",
    "express": "^4.18.0"
  },
  "devDependencies": {
    "jest": "^29.0.0"
  }
}"#,
        )
        .unwrap();

        assert_eq!(declared_dependency_count(&manifest), 3);
    }

    #[test]
    fn test_declared_count_ignores_quoted_keys_outside_dependency_sections() {
        // Quoted keys elsewhere in the manifest (scripts, metadata) must not
        // inflate the count.
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join(MANIFEST_FILE);
        fs::write(
            &manifest,
            r#"{
  "name": "fixture",
  "scripts": {
    "build": "webpack",
    "test": "jest",
    "lint": "eslint ."
  },
  "dependencies": {
    "lodash": "^4.17.0"
  }
}"#,
        )
        .unwrap();

        assert_eq!(declared_dependency_count(&manifest), 1);
    }

    #[test]
    fn test_declared_count_corrupt_manifest_is_zero() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join(MANIFEST_FILE);
        fs::write(&manifest, "{not valid json").unwrap();

        assert_eq!(declared_dependency_count(&manifest), 0);
    }

    #[test]
    fn test_declared_count_manifest_without_dependency_sections_is_zero() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join(MANIFEST_FILE);
        fs::write(&manifest, r#"{"name": "bare", "version": "0.0.1"}"#).unwrap();

        assert_eq!(declared_dependency_count(&manifest), 0);
    }
}
