//! Market overview and the pinned-comparables table.

use serde::Serialize;

use crate::application::tiers::TierClassifier;
use crate::domain::entities::catalog::Catalog;
use crate::domain::entities::property::{Property, PropertyId};
use crate::domain::values::marker::MarkerStatus;
use crate::domain::values::metric::{Metric, UnavailableReason};
use crate::domain::values::tier::MarketTier;

#[derive(Debug, Clone, Serialize)]
pub struct TierCount {
    pub tier: MarketTier,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSummary {
    pub property_count: usize,
    pub avg_adr: Metric,
    pub avg_occupancy: Metric,
    pub avg_annual_revenue: Metric,
    /// Premium first.
    pub tiers: Vec<TierCount>,
}

impl MarketSummary {
    pub fn from_properties<'a, I>(properties: I, classifier: &TierClassifier) -> Self
    where
        I: IntoIterator<Item = &'a Property>,
    {
        let props: Vec<&Property> = properties.into_iter().collect();
        let n = props.len() as f64;
        let mean = |f: fn(&Property) -> f64| -> Metric {
            let total: f64 = props.iter().map(|p| f(p)).sum();
            Metric::ratio(total, n, UnavailableReason::NoData)
        };

        let tiers = MarketTier::ALL
            .iter()
            .map(|&tier| TierCount {
                tier,
                label: classifier.thresholds().band_label(tier),
                count: props
                    .iter()
                    .filter(|p| classifier.classify_property(p) == tier)
                    .count(),
            })
            .collect();

        MarketSummary {
            property_count: props.len(),
            avg_adr: mean(|p| p.adr),
            avg_occupancy: mean(|p| p.occupancy.value()),
            avg_annual_revenue: mean(|p| p.annual_revenue),
            tiers,
        }
    }
}

/// One row of the pinned comparables table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub id: PropertyId,
    pub address: String,
    pub annual_revenue: f64,
    pub adr: f64,
    pub occupancy: f64,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub tier: MarketTier,
    pub marker: MarkerStatus,
    pub is_base: bool,
    pub is_target: bool,
}

/// Pinned properties in catalog order.
pub fn comparison_rows(catalog: &Catalog, classifier: &TierClassifier) -> Vec<ComparisonRow> {
    catalog
        .pinned()
        .map(|p| ComparisonRow {
            id: p.id,
            address: p.address.clone(),
            annual_revenue: p.annual_revenue,
            adr: p.adr,
            occupancy: p.occupancy.value(),
            rating: p.rating.map(|r| r.value()),
            review_count: p.review_count,
            tier: classifier.classify_property(p),
            marker: MarkerStatus::of(p),
            is_base: p.is_base(),
            is_target: p.is_target(),
        })
        .collect()
}
