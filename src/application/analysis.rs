//! Investment analysis.
//!
//! Projects three revenue scenarios from the designated comparables and
//! derives point metrics against the base scenario:
//!
//! - conservative = target revenue × (1 − `conservative_discount`)
//! - base = base comparable revenue, or the mean revenue of pinned properties
//! - optimistic = target revenue × (1 + `optimistic_premium`)
//!
//! Without a target every scenario (and every revenue-derived metric) is
//! [`Metric::Unavailable`] with [`UnavailableReason::AwaitingTarget`].

use tracing::debug;

use crate::domain::entities::catalog::Catalog;
use crate::domain::error::DomainError;
use crate::domain::values::investment::InvestmentInputs;
use crate::domain::values::metric::{Metric, UnavailableReason};
use crate::domain::values::scenario::{
    BaseSource, PointMetrics, Scenario, ScenarioConfig, ScenarioKind, ScenarioResult,
};

pub struct InvestmentAnalyzer {
    config: ScenarioConfig,
}

impl InvestmentAnalyzer {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Fails only when an input amount is negative or non-finite.
    pub fn analyze(
        &self,
        catalog: &Catalog,
        inputs: &InvestmentInputs,
    ) -> Result<ScenarioResult, DomainError> {
        inputs.validate()?;

        let target = catalog.target();
        let (base_revenue, base_source) = base_reference(catalog);

        let (conservative, base, optimistic) = match target {
            Some(t) => (
                Metric::finite(
                    t.annual_revenue * (1.0 - self.config.conservative_discount),
                    UnavailableReason::Overflow,
                ),
                base_revenue,
                Metric::finite(
                    t.annual_revenue * (1.0 + self.config.optimistic_premium),
                    UnavailableReason::Overflow,
                ),
            ),
            None => {
                let awaiting = Metric::Unavailable(UnavailableReason::AwaitingTarget);
                (awaiting, awaiting, awaiting)
            }
        };

        debug!(
            target_id = ?target.map(|t| t.id),
            ?base_source,
            reference = %base,
            "computed revenue scenarios"
        );

        Ok(ScenarioResult {
            target_id: target.map(|t| t.id),
            base_source: if target.is_some() {
                base_source
            } else {
                BaseSource::Unavailable
            },
            scenarios: [
                Scenario {
                    kind: ScenarioKind::Conservative,
                    annual_revenue: conservative,
                },
                Scenario {
                    kind: ScenarioKind::Base,
                    annual_revenue: base,
                },
                Scenario {
                    kind: ScenarioKind::Optimistic,
                    annual_revenue: optimistic,
                },
            ],
            metrics: point_metrics(base, inputs),
        })
    }
}

/// Base comparable revenue if designated, else the pinned mean.
fn base_reference(catalog: &Catalog) -> (Metric, BaseSource) {
    if let Some(base) = catalog.base() {
        return (
            Metric::finite(base.annual_revenue, UnavailableReason::Overflow),
            BaseSource::Designated {
                property_id: base.id,
            },
        );
    }

    let pinned_count = catalog.pinned_count();
    if pinned_count == 0 {
        return (
            Metric::Unavailable(UnavailableReason::NoPinnedProperties),
            BaseSource::Unavailable,
        );
    }
    let total: f64 = catalog.pinned().map(|p| p.annual_revenue).sum();
    (
        Metric::ratio(total, pinned_count as f64, UnavailableReason::Overflow),
        BaseSource::PinnedMean { pinned_count },
    )
}

/// Point metrics against `reference_revenue`.
pub fn point_metrics(reference_revenue: Metric, inputs: &InvestmentInputs) -> PointMetrics {
    let total_investment = inputs.total_investment();
    let noi = reference_revenue.map(
        |revenue| revenue - inputs.annual_operating_expenses,
        UnavailableReason::Overflow,
    );

    PointMetrics {
        total_investment,
        reference_revenue,
        net_operating_income: noi,
        roi_percent: noi.and_then(|n| {
            Metric::ratio(n, total_investment, UnavailableReason::ZeroTotalInvestment)
                .map(|r| r * 100.0, UnavailableReason::Overflow)
        }),
        cap_rate_percent: noi.and_then(|n| {
            Metric::ratio(n, inputs.purchase_price, UnavailableReason::ZeroPurchasePrice)
                .map(|r| r * 100.0, UnavailableReason::Overflow)
        }),
        monthly_cash_flow: noi.map(|n| n / 12.0, UnavailableReason::Overflow),
        payback_period_years: noi.and_then(|n| {
            if n <= 0.0 {
                Metric::Unavailable(UnavailableReason::NonPositiveNoi)
            } else {
                Metric::finite(total_investment / n, UnavailableReason::Overflow)
            }
        }),
    }
}
