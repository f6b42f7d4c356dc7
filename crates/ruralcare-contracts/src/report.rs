//! Provenance wrapper returned alongside a `HealthcareStats` value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::HealthcareStats;

/// Which value set populated a `HealthcareStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatsOrigin {
    /// Derived from a fetched physician-density observation.
    Live,
    /// The literal substitute dataset, used after an acquisition failure.
    Fallback,
}

impl StatsOrigin {
    pub fn label(self) -> &'static str {
        match self {
            StatsOrigin::Live => "live",
            StatsOrigin::Fallback => "fallback",
        }
    }
}

/// One `produce_report()` outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub stats: HealthcareStats,
    pub origin: StatsOrigin,
    pub produced_at: DateTime<Utc>,
    /// The absorbed acquisition error, rendered. `None` on the live branch.
    pub failure: Option<String>,
}

impl StatsReport {
    pub fn is_fallback(&self) -> bool {
        self.origin == StatsOrigin::Fallback
    }
}
