//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Package emoji for dependency listings
pub const PACKAGE: Emoji = Emoji("📦", "#");

/// Memo emoji for report writing
pub const MEMO: Emoji = Emoji("📝", "*");

/// Placeholder shown wherever a measurement is unavailable
pub const UNAVAILABLE: &str = "n/a";

/// Format bytes as a compact, `du`-style size string
///
/// # Examples
///
/// ```
/// use depsize::fmt::format_size;
///
/// assert_eq!(format_size(300), "300B");
/// assert_eq!(format_size(1536), "1.5K");
/// assert_eq!(format_size(5 * 1024 * 1024), "5.0M");
/// assert_eq!(format_size(2 * 1024 * 1024 * 1024), "2.0G");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format an optional byte count, substituting the unavailable placeholder
///
/// # Examples
///
/// ```
/// use depsize::fmt::format_size_opt;
///
/// assert_eq!(format_size_opt(Some(1024)), "1.0K");
/// assert_eq!(format_size_opt(None), "n/a");
/// ```
pub fn format_size_opt(bytes: Option<u64>) -> String {
    match bytes {
        Some(b) => format_size(b),
        None => UNAVAILABLE.to_string(),
    }
}

/// Format number with thousand separators
///
/// # Examples
///
/// ```
/// use depsize::fmt::format_number;
///
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: u64) -> String {
    n.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(",")
}
