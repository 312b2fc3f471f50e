//! Revenue scenarios and the point metrics derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::values::metric::Metric;

/// Sensitivity bounds applied to the target comparable's revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Conservative = target × (1 − discount). Default 0.20.
    pub conservative_discount: f64,
    /// Optimistic = target × (1 + premium). Default 0.15.
    pub optimistic_premium: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            conservative_discount: 0.20,
            optimistic_premium: 0.15,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.conservative_discount) {
            return Err(format!(
                "conservative_discount must be between 0 and 1, got {}",
                self.conservative_discount
            ));
        }
        if !self.optimistic_premium.is_finite() || self.optimistic_premium < 0.0 {
            return Err(format!(
                "optimistic_premium must be a non-negative number, got {}",
                self.optimistic_premium
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Conservative,
    Base,
    Optimistic,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioKind::Conservative => write!(f, "conservative"),
            ScenarioKind::Base => write!(f, "base"),
            ScenarioKind::Optimistic => write!(f, "optimistic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub annual_revenue: Metric,
}

/// Where the base scenario's revenue came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum BaseSource {
    Designated { property_id: u64 },
    PinnedMean { pinned_count: usize },
    Unavailable,
}

/// Metrics computed against the base scenario's revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMetrics {
    pub total_investment: f64,
    pub reference_revenue: Metric,
    pub net_operating_income: Metric,
    pub roi_percent: Metric,
    pub cap_rate_percent: Metric,
    pub monthly_cash_flow: Metric,
    pub payback_period_years: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub target_id: Option<u64>,
    pub base_source: BaseSource,
    /// Always conservative, base, optimistic in that order.
    pub scenarios: [Scenario; 3],
    pub metrics: PointMetrics,
}

impl ScenarioResult {
    pub fn scenario(&self, kind: ScenarioKind) -> &Scenario {
        match kind {
            ScenarioKind::Conservative => &self.scenarios[0],
            ScenarioKind::Base => &self.scenarios[1],
            ScenarioKind::Optimistic => &self.scenarios[2],
        }
    }

    pub fn revenue(&self, kind: ScenarioKind) -> Metric {
        self.scenario(kind).annual_revenue
    }

    /// `true` when no target is designated and the renderer should show
    /// an "awaiting target selection" state.
    pub fn awaiting_target(&self) -> bool {
        self.target_id.is_none()
    }
}
