//! Size-trend history carried between runs
//!
//! The previous report's trend table is the sole source of history: its rows
//! are parsed back out of the Markdown and re-emitted verbatim, bounded to a
//! small trailing window. History therefore never grows past one table.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Maximum number of historical rows carried into a new report
pub const MAX_CARRIED_ROWS: usize = 4;

/// One row of the size-trend table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendRow {
    /// Run date (YYYY-MM-DD)
    pub date: String,
    /// Formatted total project size at that run
    pub total: String,
    /// Formatted dependency directory size at that run
    pub deps: String,
}

fn row_regex() -> &'static Regex {
    static ROW: OnceLock<Regex> = OnceLock::new();
    ROW.get_or_init(|| {
        // Matches data rows like `| 2026-08-07 | 120.0M | 85.0M |`;
        // header and divider rows do not start with a date.
        Regex::new(r"(?m)^\|\s*(\d{4}-\d{2}-\d{2})\s*\|\s*([^|]+?)\s*\|\s*([^|]+?)\s*\|\s*$")
            .expect("trend row pattern is valid")
    })
}

/// Extract trend rows from a previous report document, newest first,
/// truncated to [`MAX_CARRIED_ROWS`].
///
/// Documents without a trend table (or arbitrary non-report text) yield an
/// empty history.
///
/// # Examples
///
/// ```
/// use depsize::report::trend::parse_trend_rows;
///
/// let md = "| Date | Total size | node_modules |\n\
///           | --- | --- | --- |\n\
///           | 2026-08-07 | 120.0M | 85.0M |\n";
/// let rows = parse_trend_rows(md);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].date, "2026-08-07");
/// ```
pub fn parse_trend_rows(markdown: &str) -> Vec<TrendRow> {
    row_regex()
        .captures_iter(markdown)
        .take(MAX_CARRIED_ROWS)
        .map(|cap| TrendRow {
            date: cap[1].to_string(),
            total: cap[2].to_string(),
            deps: cap[3].to_string(),
        })
        .collect()
}
