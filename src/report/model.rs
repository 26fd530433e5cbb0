//! Report data model
//!
//! The [`ProjectReport`] is assembled fresh on every run from the scan
//! results; nothing here touches the filesystem.

use serde::Serialize;

use crate::scan::dir_size::{dependency_percent, DirMeasurement};
use crate::scan::packages::PackageScan;

use super::recommendations::HeavyPresence;
use super::trend::TrendRow;

/// Recommendation priority tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Act now; large or structural savings expected
    High,
    /// Worth scheduling; clear replacement available
    Medium,
    /// Review when convenient
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

/// A single advisory entry in the recommendations section
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Priority tier
    pub severity: Severity,
    /// Advisory text
    pub action: String,
}

/// Everything a single run reports on
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    /// Wall-clock timestamp of the run
    pub generated_at: String,
    /// Fixed, ordered set of directory measurements
    pub directories: Vec<DirMeasurement>,
    /// Share of the root tree occupied by the dependency directory
    pub dependency_percent: u64,
    /// Ranked installed packages plus counts
    pub packages: PackageScan,
    /// Dependencies declared in the manifest
    pub declared_dependencies: usize,
    /// Which known heavy packages are installed
    pub heavy_presence: HeavyPresence,
    /// Tiered advisories
    pub recommendations: Vec<Recommendation>,
    /// Historical rows carried forward from the previous report
    pub carried_trend: Vec<TrendRow>,
}

impl ProjectReport {
    /// Assemble a report from scan results.
    ///
    /// `directories` must lead with the project root measurement followed by
    /// the dependency directory; the dependency percentage is derived from
    /// those two entries.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        generated_at: String,
        directories: Vec<DirMeasurement>,
        packages: PackageScan,
        declared_dependencies: usize,
        heavy_presence: HeavyPresence,
        recommendations: Vec<Recommendation>,
        carried_trend: Vec<TrendRow>,
    ) -> Self {
        let root_size = directories.first().and_then(|d| d.size_bytes);
        let deps_size = directories.get(1).and_then(|d| d.size_bytes);
        Self {
            generated_at,
            dependency_percent: dependency_percent(root_size, deps_size),
            directories,
            packages,
            declared_dependencies,
            heavy_presence,
            recommendations,
            carried_trend,
        }
    }

    /// Root tree size, if measured
    pub fn root_size(&self) -> Option<u64> {
        self.directories.first().and_then(|d| d.size_bytes)
    }

    /// Dependency directory size, if measured
    pub fn deps_size(&self) -> Option<u64> {
        self.directories.get(1).and_then(|d| d.size_bytes)
    }

    /// Recommendations filtered to one tier
    pub fn recommendations_by_severity(&self, severity: Severity) -> Vec<&Recommendation> {
        self.recommendations
            .iter()
            .filter(|r| r.severity == severity)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::packages::PackageScan;

    fn measurement(label: &str, size: Option<u64>) -> DirMeasurement {
        DirMeasurement {
            label: label.to_string(),
            size_bytes: size,
        }
    }

    fn empty_scan() -> PackageScan {
        PackageScan {
            entries: Vec::new(),
            total_packages: 0,
            total_files: 0,
        }
    }

    fn report_with(dirs: Vec<DirMeasurement>) -> ProjectReport {
        ProjectReport::new(
            "2026-01-01 00:00:00".to_string(),
            dirs,
            empty_scan(),
            0,
            HeavyPresence::default(),
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_severity_display_and_ordering() {
        assert_eq!(Severity::High.to_string(), "High");
        assert_eq!(Severity::Medium.to_string(), "Medium");
        assert_eq!(Severity::Low.to_string(), "Low");
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }

    #[test]
    fn test_report_derives_percent_from_leading_measurements() {
        let report = report_with(vec![
            measurement("project root", Some(200)),
            measurement("node_modules", Some(50)),
        ]);
        assert_eq!(report.dependency_percent, 25);
        assert_eq!(report.root_size(), Some(200));
        assert_eq!(report.deps_size(), Some(50));
    }

    #[test]
    fn test_report_percent_falls_back_when_unmeasured() {
        let report = report_with(vec![
            measurement("project root", None),
            measurement("node_modules", Some(50)),
        ]);
        assert_eq!(report.dependency_percent, 0);
    }

    #[test]
    fn test_recommendations_by_severity_filters() {
        let mut report = report_with(vec![measurement("project root", Some(1))]);
        report.recommendations = vec![
            Recommendation {
                severity: Severity::High,
                action: "a".to_string(),
            },
            Recommendation {
                severity: Severity::Low,
                action: "b".to_string(),
            },
        ];

        let high = report.recommendations_by_severity(Severity::High);
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].action, "a");
        assert!(report.recommendations_by_severity(Severity::Medium).is_empty());
    }
}
