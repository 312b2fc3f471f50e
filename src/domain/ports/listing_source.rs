//! Port for the upstream data collaborator that supplies listing records.
//!
//! The engine never fetches marketplace data itself. A [`ListingSource`]
//! hands over already-obtained records, which `load_catalog` validates into
//! [`Property`](crate::domain::entities::property::Property) values.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A numeric field that upstream exports as either a number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

/// One listing as supplied upstream. Required fields are optional here so a
/// missing one can be reported by name instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Option<u64>,
    pub address: Option<String>,
    #[serde(alias = "type", alias = "propertyType")]
    pub property_type: Option<String>,
    pub bedrooms: Option<RawNumber>,
    #[serde(alias = "bathrooms_text")]
    pub bathrooms: Option<RawNumber>,
    #[serde(alias = "annualRevenue")]
    pub annual_revenue: Option<RawNumber>,
    #[serde(alias = "price")]
    pub adr: Option<RawNumber>,
    #[serde(alias = "occupancy_rate", alias = "occupancyRate")]
    pub occupancy: Option<RawNumber>,
    #[serde(alias = "reviews", alias = "number_of_reviews", alias = "reviewCount")]
    pub review_count: Option<RawNumber>,
    /// ISO date (YYYY-MM-DD).
    #[serde(alias = "lastReview")]
    pub last_review: Option<String>,
    #[serde(alias = "daysTracked")]
    pub days_tracked: Option<RawNumber>,
    pub platform: Option<String>,
    pub rating: Option<RawNumber>,
    pub amenities: Vec<String>,
    #[serde(alias = "is_pinned", alias = "isPinned")]
    pub pinned: bool,
    #[serde(alias = "isBase")]
    pub is_base: bool,
    #[serde(alias = "isTarget")]
    pub is_target: bool,
}

/// Supplies raw listing records to the engine.
pub trait ListingSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Return every record the source currently holds.
    fn fetch(&self) -> Result<Vec<RawRecord>, DomainError>;
}
