//! Markdown document rendering
//!
//! Sections appear in a fixed order so consecutive runs produce
//! line-comparable documents: directory overview, package table, package
//! statistics, recommendations, maintenance commands, size trend, best
//! practices.

use crate::fmt::{format_number, format_size_opt, UNAVAILABLE};

use super::model::{ProjectReport, Severity};

/// Notice rendered when the dependency directory is missing or empty
pub const NO_ANALYSIS_NOTICE: &str =
    "No dependency analysis available: the dependency directory is missing or empty.";

/// Render the full report document.
pub fn render(report: &ProjectReport) -> String {
    let mut out = String::new();

    out.push_str("# Dependency Size Report\n\n");
    out.push_str(&format!("Generated: {}\n\n", report.generated_at));

    render_directory_overview(report, &mut out);
    render_package_table(report, &mut out);
    render_package_statistics(report, &mut out);
    render_recommendations(report, &mut out);
    render_maintenance_commands(&mut out);
    render_size_trend(report, &mut out);
    render_best_practices(report, &mut out);

    out
}

fn render_directory_overview(report: &ProjectReport, out: &mut String) {
    out.push_str("## Directory Overview\n\n");
    out.push_str("| Directory | Size |\n| --- | --- |\n");
    for dir in &report.directories {
        out.push_str(&format!(
            "| {} | {} |\n",
            dir.label,
            format_size_opt(dir.size_bytes)
        ));
    }
    out.push_str(&format!(
        "\nThe dependency directory occupies {}% of the project tree.\n\n",
        report.dependency_percent
    ));
}

fn render_package_table(report: &ProjectReport, out: &mut String) {
    out.push_str("## Installed Packages\n\n");
    if report.packages.is_empty() {
        out.push_str(NO_ANALYSIS_NOTICE);
        out.push_str("\n\n");
        return;
    }

    out.push_str("| Package | Size | Purpose |\n| --- | --- | --- |\n");
    for entry in &report.packages.entries {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            entry.name,
            format_size_opt(Some(entry.size_bytes)),
            entry.purpose
        ));
    }
    out.push('\n');
}

fn render_package_statistics(report: &ProjectReport, out: &mut String) {
    out.push_str("## Package Statistics\n\n");
    out.push_str(&format!(
        "- Installed packages: {}\n",
        format_number(report.packages.total_packages as u64)
    ));
    out.push_str(&format!(
        "- Files in the dependency directory: {}\n",
        format_number(report.packages.total_files)
    ));
    out.push_str(&format!(
        "- Dependencies declared in the manifest: {}\n\n",
        format_number(report.declared_dependencies as u64)
    ));
}

fn render_recommendations(report: &ProjectReport, out: &mut String) {
    out.push_str("## Optimization Recommendations\n\n");
    for severity in [Severity::High, Severity::Medium, Severity::Low] {
        let tier = report.recommendations_by_severity(severity);
        if tier.is_empty() {
            continue;
        }
        out.push_str(&format!("### {} priority\n\n", severity));
        for rec in tier {
            out.push_str(&format!("- {}\n", rec.action));
        }
        out.push('\n');
    }
}

fn render_maintenance_commands(out: &mut String) {
    out.push_str("## Maintenance Commands\n\n");
    out.push_str("```sh\n");
    out.push_str("npm ls --depth=0      # list direct dependencies\n");
    out.push_str("npm prune             # remove packages not in the manifest\n");
    out.push_str("npm dedupe            # flatten duplicated subtrees\n");
    out.push_str("npx depcheck          # find declared-but-unused dependencies\n");
    out.push_str("du -sh node_modules   # spot-check the measured size\n");
    out.push_str("```\n\n");
}

fn render_size_trend(report: &ProjectReport, out: &mut String) {
    out.push_str("## Size Trend\n\n");
    out.push_str("| Date | Total size | Dependency size |\n| --- | --- | --- |\n");

    // Current run first, then the carried window, newest to oldest.
    let date = report
        .generated_at
        .split_whitespace()
        .next()
        .unwrap_or(UNAVAILABLE);
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        date,
        format_size_opt(report.root_size()),
        format_size_opt(report.deps_size())
    ));
    for row in &report.carried_trend {
        out.push_str(&format!("| {} | {} | {} |\n", row.date, row.total, row.deps));
    }
    out.push('\n');
}

fn render_best_practices(report: &ProjectReport, out: &mut String) {
    out.push_str("## Best Practices\n\n");
    out.push_str("- Commit the manifest and its lockfile together\n");
    out.push_str("- Keep the dependency directory out of version control\n");
    out.push_str("- Audit newly added packages for install size before adopting them\n");
    if report.heavy_presence.lodash {
        out.push_str("- Prefer per-method lodash imports over the full package\n");
    }
    if report.heavy_presence.moment {
        out.push_str("- New code should not take a dependency on moment\n");
    }
    if report.heavy_presence.async_lib {
        out.push_str("- Prefer native async/await over callback helpers\n");
    }
    out.push('\n');
}
