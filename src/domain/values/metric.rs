//! Computed figures that may be undefined.
//!
//! Financially undefined results (no target selected, zero purchase price,
//! non-positive NOI) are valid business outcomes, not errors. They are carried
//! as [`Metric::Unavailable`] with a reason so renderers never see NaN or ∞.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a metric could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// No target comparable has been designated.
    AwaitingTarget,
    /// No base comparable and no pinned properties to average.
    NoPinnedProperties,
    /// Cap rate divides by purchase price.
    ZeroPurchasePrice,
    /// ROI divides by total investment.
    ZeroTotalInvestment,
    /// Payback never happens when NOI is zero or negative.
    NonPositiveNoi,
    /// Aggregate over an empty set.
    NoData,
    /// The result exceeds the representable range.
    Overflow,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::AwaitingTarget => write!(f, "awaiting target selection"),
            UnavailableReason::NoPinnedProperties => write!(f, "no pinned properties"),
            UnavailableReason::ZeroPurchasePrice => write!(f, "purchase price is zero"),
            UnavailableReason::ZeroTotalInvestment => write!(f, "total investment is zero"),
            UnavailableReason::NonPositiveNoi => write!(f, "net operating income is not positive"),
            UnavailableReason::NoData => write!(f, "no data"),
            UnavailableReason::Overflow => write!(f, "result out of range"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Metric {
    Value(f64),
    Unavailable(UnavailableReason),
}

impl Metric {
    /// Wraps `value`, falling back to `reason` if it is not finite.
    pub fn finite(value: f64, reason: UnavailableReason) -> Self {
        if value.is_finite() {
            Metric::Value(value)
        } else {
            Metric::Unavailable(reason)
        }
    }

    /// `numerator / denominator`, unavailable when the denominator is zero.
    pub fn ratio(numerator: f64, denominator: f64, reason: UnavailableReason) -> Self {
        if denominator == 0.0 {
            return Metric::Unavailable(reason);
        }
        Metric::finite(numerator / denominator, reason)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(*v),
            Metric::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Metric::Value(_))
    }

    pub fn reason(&self) -> Option<UnavailableReason> {
        match self {
            Metric::Value(_) => None,
            Metric::Unavailable(reason) => Some(*reason),
        }
    }

    /// Applies `f`, falling back to `reason` if the result is not finite.
    pub fn map(self, f: impl FnOnce(f64) -> f64, reason: UnavailableReason) -> Self {
        match self {
            Metric::Value(v) => Metric::finite(f(v), reason),
            unavailable => unavailable,
        }
    }

    /// Chains a computation that may itself be unavailable.
    pub fn and_then(self, f: impl FnOnce(f64) -> Metric) -> Self {
        match self {
            Metric::Value(v) => f(v),
            unavailable => unavailable,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{v:.2}"),
            Metric::Unavailable(reason) => write!(f, "n/a ({reason})"),
        }
    }
}
