use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::values::occupancy::OccupancyRate;
use crate::domain::values::platform::Platforms;
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::rating::GuestRating;

pub type PropertyId = u64;

/// A comparable short-term-rental listing.
///
/// Listing data is fixed at construction. Only the pinned/base/target flags
/// change afterwards, and only through a [`Catalog`](super::catalog::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: PropertyId,
    pub address: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub annual_revenue: f64,
    /// Average daily rate.
    pub adr: f64,
    pub occupancy: OccupancyRate,
    pub review_count: u32,
    pub last_review: Option<NaiveDate>,
    pub days_tracked: u32,
    pub platforms: Platforms,
    pub rating: Option<GuestRating>,
    pub amenities: BTreeSet<String>,
    pinned: bool,
    is_base: bool,
    is_target: bool,
}

impl Property {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PropertyId,
        address: String,
        property_type: PropertyType,
        bedrooms: u32,
        bathrooms: u32,
        annual_revenue: f64,
        adr: f64,
        occupancy: OccupancyRate,
        review_count: u32,
        last_review: Option<NaiveDate>,
        days_tracked: u32,
        platforms: Platforms,
        rating: Option<GuestRating>,
        amenities: BTreeSet<String>,
    ) -> Self {
        Self {
            id,
            address,
            property_type,
            bedrooms,
            bathrooms,
            annual_revenue,
            adr,
            occupancy,
            review_count,
            last_review,
            days_tracked,
            platforms,
            rating,
            amenities,
            pinned: false,
            is_base: false,
            is_target: false,
        }
    }

    /// Initial flags as supplied by the upstream collaborator. The catalog
    /// validates them against its invariants when it is built.
    pub fn with_flags(mut self, pinned: bool, is_base: bool, is_target: bool) -> Self {
        self.pinned = pinned;
        self.is_base = is_base;
        self.is_target = is_target;
        self
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn is_target(&self) -> bool {
        self.is_target
    }

    pub fn is_designated(&self) -> bool {
        self.is_base || self.is_target
    }

    pub(crate) fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    pub(crate) fn set_base(&mut self, is_base: bool) {
        self.is_base = is_base;
    }

    pub(crate) fn set_target(&mut self, is_target: bool) {
        self.is_target = is_target;
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|a| a.eq_ignore_ascii_case(amenity))
    }
}
