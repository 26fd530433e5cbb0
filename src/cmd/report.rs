//! Report command implementation
//!
//! Orchestrates one sequential run: measure the fixed directory set, rank
//! installed packages, count declared dependencies, assemble the Markdown
//! document, persist it through the two-slot store, and print a condensed
//! summary (or JSON) to the console.

use anyhow::{Context, Result};
use chrono::Local;
use console::style;
use indicatif::ProgressBar;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::DepsizeError;
use crate::fmt::{format_number, format_size_opt, CHART, CHECKMARK, MEMO, MICROSCOPE, PACKAGE};
use crate::report::recommendations::NO_ACTION_NEEDED;
use crate::report::{build_recommendations, parse_trend_rows, render, HeavyPresence};
use crate::report::{ProjectReport, ReportStore};
use crate::scan::manifest::MANIFEST_FILE;
use crate::scan::{declared_dependency_count, scan_packages, DirMeasurement};

/// Fixed set of measured directories: label and path relative to the
/// project root (the empty string is the root itself). Order is the report's
/// table order; the first two entries feed the percentage.
const MEASURED_DIRS: [(&str, &str); 8] = [
    ("project root", ""),
    ("node_modules", "node_modules"),
    (".git", ".git"),
    ("logs", "logs"),
    ("src", "src"),
    ("dist", "dist"),
    ("build", "build"),
    ("coverage", "coverage"),
];

/// Generate the disk-usage report for `project_root` (current directory
/// when `None`).
///
/// With `json` set, the assembled report is printed as pretty JSON instead
/// of the styled console summary; the report file is written either way.
pub fn cmd_report(project_root: Option<&str>, json: bool) -> Result<()> {
    let root = match project_root {
        Some(p) => PathBuf::from(p),
        None => env::current_dir().context("Failed to resolve current directory")?,
    };
    if !root.is_dir() {
        return Err(DepsizeError::ProjectRootNotFound { path: root }.into());
    }

    if !json {
        println!("{} {} Disk Usage Audit", MICROSCOPE, style("depsize").bold());
    }

    let directories = measure_directories(&root, json);

    let deps_dir = root.join("node_modules");
    let packages = scan_packages(&deps_dir);
    let declared = declared_dependency_count(&root.join(MANIFEST_FILE));
    let presence = HeavyPresence::detect(&deps_dir);
    let recommendations = build_recommendations(&presence);

    let store = ReportStore::new(&root);
    let carried = store
        .previous_report()
        .map(|md| parse_trend_rows(&md))
        .unwrap_or_default();

    let report = ProjectReport::new(
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        directories,
        packages,
        declared,
        presence,
        recommendations,
        carried,
    );

    let document = render(&report);
    store.write(&document).map_err(DepsizeError::from)?;

    if json {
        let json_output = serde_json::to_string_pretty(&report)
            .context("Failed to serialize report to JSON")?;
        println!("{}", json_output);
    } else {
        print_summary(&report, store.report_path());
    }

    Ok(())
}

/// Measure the fixed directory set in order, with a progress spinner on the
/// console run.
fn measure_directories(root: &Path, json: bool) -> Vec<DirMeasurement> {
    let spinner = if json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };

    let mut directories = Vec::with_capacity(MEASURED_DIRS.len());
    for (label, rel) in MEASURED_DIRS {
        spinner.set_message(format!("Measuring {}", label));
        spinner.tick();
        let path = if rel.is_empty() {
            root.to_path_buf()
        } else {
            root.join(rel)
        };
        directories.push(DirMeasurement::take(label, &path));
    }
    spinner.finish_and_clear();

    directories
}

/// Print the condensed console rendition of the report statistics
fn print_summary(report: &ProjectReport, report_path: &Path) {
    println!("\n{} {} Directory Overview", CHART, style("Sizes").bold());
    for dir in &report.directories {
        println!(
            "   {} {}: {}",
            style("→").dim(),
            dir.label,
            style(format_size_opt(dir.size_bytes)).yellow()
        );
    }
    println!(
        "   {} dependency share of project: {}",
        style("→").dim(),
        style(format!("{}%", report.dependency_percent)).yellow().bold()
    );

    if report.packages.is_empty() {
        println!(
            "\n{} {} No dependency analysis available",
            PACKAGE,
            style("Packages").bold()
        );
    } else {
        println!(
            "\n{} {} Heaviest Packages",
            PACKAGE,
            style("Packages").bold()
        );
        for entry in report.packages.entries.iter().take(3) {
            println!(
                "   {} {}: {} ({})",
                style("→").dim(),
                style(&entry.name).bold(),
                style(format_size_opt(Some(entry.size_bytes))).yellow(),
                entry.purpose
            );
        }
        println!(
            "   {} {} packages, {} files, {} declared in {}",
            style("→").dim(),
            style(format_number(report.packages.total_packages as u64)).yellow(),
            style(format_number(report.packages.total_files)).yellow(),
            style(format_number(report.declared_dependencies as u64)).yellow(),
            MANIFEST_FILE
        );
    }

    let advisory_count = report
        .recommendations
        .iter()
        .filter(|r| r.action != NO_ACTION_NEEDED)
        .count();
    if advisory_count > 0 {
        println!(
            "\n{} {} optimization recommendations (see report)",
            MICROSCOPE,
            style(advisory_count).yellow().bold()
        );
    } else {
        println!(
            "\n{} {} No optimization action needed",
            CHECKMARK,
            style("Clean").green().bold()
        );
    }

    println!(
        "\n{} Report written to {}",
        MEMO,
        style(report_path.display()).bold()
    );
}
