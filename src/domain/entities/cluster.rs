use serde::{Deserialize, Serialize};

/// Aggregate performance of a geographic cluster (neighbourhood).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub avg_adr: f64,
    /// Average occupancy, percent.
    pub occupancy_rate: f64,
    pub property_count: u32,
}
