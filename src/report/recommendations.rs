//! Presence-based optimization recommendations
//!
//! Advisories are driven by simple presence checks for known heavy packages
//! under the dependency directory. No trigger firing yields a single default
//! entry so the section is never empty.

use serde::Serialize;
use std::path::Path;

use super::model::{Recommendation, Severity};

/// Advisory shown when no heavy package triggered a recommendation
pub const NO_ACTION_NEEDED: &str =
    "No immediate action needed; the dependency footprint looks reasonable";

/// Which known heavy packages are installed under the dependency directory
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct HeavyPresence {
    /// `lodash` is installed
    pub lodash: bool,
    /// `moment` is installed
    pub moment: bool,
    /// `async` is installed
    pub async_lib: bool,
}

impl HeavyPresence {
    /// Probe `deps_dir` for the known heavy packages
    pub fn detect(deps_dir: &Path) -> Self {
        Self {
            lodash: deps_dir.join("lodash").exists(),
            moment: deps_dir.join("moment").exists(),
            async_lib: deps_dir.join("async").exists(),
        }
    }

    /// True when any heavy package triggered
    pub fn any(&self) -> bool {
        self.lodash || self.moment || self.async_lib
    }
}

/// Build the tiered recommendation list for the report.
///
/// # Examples
///
/// ```
/// use depsize::report::recommendations::{build_recommendations, HeavyPresence};
/// use depsize::report::model::Severity;
///
/// let recs = build_recommendations(&HeavyPresence {
///     moment: true,
///     ..Default::default()
/// });
/// assert!(recs.iter().any(|r| r.severity == Severity::Medium));
/// ```
pub fn build_recommendations(presence: &HeavyPresence) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if presence.lodash {
        recs.push(Recommendation {
            severity: Severity::High,
            action: "Replace broad lodash imports with per-method imports or native \
                     Array/Object methods"
                .to_string(),
        });
    }
    if presence.moment {
        recs.push(Recommendation {
            severity: Severity::Medium,
            action: "Replace moment with a lighter date library such as date-fns or dayjs"
                .to_string(),
        });
    }
    if presence.async_lib {
        recs.push(Recommendation {
            severity: Severity::Low,
            action: "Review whether the async utility library is still necessary now that \
                     native async/await is available"
                .to_string(),
        });
    }

    if recs.is_empty() {
        recs.push(Recommendation {
            severity: Severity::Low,
            action: NO_ACTION_NEEDED.to_string(),
        });
    }

    recs
}
