//! Market performance tiers derived from average daily rate.
//!
//! Tiers are display grouping only (map legend, cluster panels) and never
//! feed into financial computations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Performance tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketTier {
    Standard,
    Medium,
    High,
    Premium,
}

impl MarketTier {
    pub const ALL: [MarketTier; 4] = [
        MarketTier::Premium,
        MarketTier::High,
        MarketTier::Medium,
        MarketTier::Standard,
    ];

    /// Legend color used by map renderers.
    pub fn color(&self) -> &'static str {
        match self {
            MarketTier::Premium => "#10b981",
            MarketTier::High => "#3b82f6",
            MarketTier::Medium => "#f59e0b",
            MarketTier::Standard => "#6b7280",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketTier::Premium => "Premium",
            MarketTier::High => "High",
            MarketTier::Medium => "Medium",
            MarketTier::Standard => "Standard",
        }
    }
}

impl fmt::Display for MarketTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketTier::Premium => write!(f, "premium"),
            MarketTier::High => write!(f, "high"),
            MarketTier::Medium => write!(f, "medium"),
            MarketTier::Standard => write!(f, "standard"),
        }
    }
}

impl FromStr for MarketTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "premium" => Ok(MarketTier::Premium),
            "high" => Ok(MarketTier::High),
            "medium" => Ok(MarketTier::Medium),
            "standard" => Ok(MarketTier::Standard),
            _ => Err(format!("Unknown market tier: {s}")),
        }
    }
}

/// ADR lower bounds (inclusive) for each tier above `standard`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub premium: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            premium: 180.0,
            high: 150.0,
            medium: 130.0,
        }
    }
}

impl TierThresholds {
    /// Thresholds must be finite, non-negative and ascending `medium ≤ high ≤ premium`.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("medium", self.medium),
            ("high", self.high),
            ("premium", self.premium),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "Tier threshold '{name}' must be a non-negative number, got {value}"
                ));
            }
        }
        if self.medium > self.high || self.high > self.premium {
            return Err(format!(
                "Tier thresholds must ascend (medium {} <= high {} <= premium {})",
                self.medium, self.high, self.premium
            ));
        }
        Ok(())
    }

    /// Classify an ADR. Ties resolve to the higher tier; negative or NaN
    /// input falls through to `standard`.
    pub fn classify(&self, adr: f64) -> MarketTier {
        if adr >= self.premium {
            MarketTier::Premium
        } else if adr >= self.high {
            MarketTier::High
        } else if adr >= self.medium {
            MarketTier::Medium
        } else {
            MarketTier::Standard
        }
    }

    /// Legend label with the ADR band `tier` covers under these thresholds.
    pub fn band_label(&self, tier: MarketTier) -> String {
        let name = tier.label();
        match tier {
            MarketTier::Premium => format!("{name} (ADR {}+)", self.premium),
            MarketTier::High => format!("{name} (ADR {} to {})", self.high, self.premium),
            MarketTier::Medium => format!("{name} (ADR {} to {})", self.medium, self.high),
            MarketTier::Standard => format!("{name} (ADR < {})", self.medium),
        }
    }
}
