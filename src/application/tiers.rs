//! Market tier classification for map legends and cluster panels.

use serde::Serialize;

use crate::domain::entities::cluster::ClusterSummary;
use crate::domain::entities::property::Property;
use crate::domain::values::tier::{MarketTier, TierThresholds};

pub struct TierClassifier {
    thresholds: TierThresholds,
}

/// A cluster paired with its tier and legend color.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCluster {
    pub cluster: ClusterSummary,
    pub tier: MarketTier,
    pub color: &'static str,
}

impl TierClassifier {
    pub fn new(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    pub fn classify(&self, adr: f64) -> MarketTier {
        self.thresholds.classify(adr)
    }

    pub fn classify_cluster(&self, cluster: &ClusterSummary) -> MarketTier {
        self.classify(cluster.avg_adr)
    }

    pub fn classify_property(&self, property: &Property) -> MarketTier {
        self.classify(property.adr)
    }

    /// Clusters sorted by average ADR, highest first. Ties keep input order.
    pub fn rank_clusters(&self, clusters: &[ClusterSummary]) -> Vec<RankedCluster> {
        let mut ranked: Vec<RankedCluster> = clusters
            .iter()
            .map(|cluster| {
                let tier = self.classify_cluster(cluster);
                RankedCluster {
                    cluster: cluster.clone(),
                    tier,
                    color: tier.color(),
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.cluster
                .avg_adr
                .partial_cmp(&a.cluster.avg_adr)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}
