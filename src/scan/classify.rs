//! Static classification table for well-known npm package names
//!
//! Maps package names to short purpose descriptions for the report's
//! dependency table. Unknown names fall back to a generic label. The table
//! is deliberately data, not branching, so new names are one-line additions.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Description used for package names not present in the table
pub const GENERIC_PURPOSE: &str = "application dependency";

/// Global name -> purpose lookup
static PURPOSE_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn init_purpose_table() -> HashMap<&'static str, &'static str> {
    let mut table = HashMap::new();

    table.insert("moment", "date/time manipulation library");
    table.insert("lodash", "utility function library");
    table.insert("async", "async control-flow helpers");
    table.insert("express", "web application framework");
    table.insert("react", "UI component library");
    table.insert("axios", "HTTP client");
    table.insert("webpack", "module bundler");
    table.insert("rollup", "ES module bundler");
    table.insert("vite", "dev server and bundler");
    table.insert("typescript", "typed JavaScript compiler");
    table.insert("@babel/core", "JavaScript compiler toolchain");
    table.insert("eslint", "code linter");
    table.insert("prettier", "code formatter");
    table.insert("jest", "testing framework");
    table.insert("mocha", "BDD testing framework");
    table.insert("core-js", "JavaScript standard-library polyfills");

    table
}

/// Resolve the purpose description for a package name.
///
/// # Examples
///
/// ```
/// use depsize::scan::classify::{describe_package, GENERIC_PURPOSE};
///
/// assert_eq!(describe_package("webpack"), "module bundler");
/// assert_eq!(describe_package("left-pad"), GENERIC_PURPOSE);
/// ```
pub fn describe_package(name: &str) -> &'static str {
    PURPOSE_TABLE
        .get_or_init(init_purpose_table)
        .get(name)
        .copied()
        .unwrap_or(GENERIC_PURPOSE)
}
