//! Builds a validated [`Catalog`] from upstream raw records.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::domain::entities::catalog::Catalog;
use crate::domain::entities::property::Property;
use crate::domain::error::DomainError;
use crate::domain::ports::listing_source::{ListingSource, RawNumber, RawRecord};
use crate::domain::values::currency::{parse_amount, parse_leading_number};
use crate::domain::values::occupancy::OccupancyRate;
use crate::domain::values::platform::Platforms;
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::rating::GuestRating;

/// Validate every record and assemble the catalog. The first bad record
/// aborts the load with `MalformedRecord`.
pub fn load_catalog(records: Vec<RawRecord>, max_pinned: usize) -> Result<Catalog, DomainError> {
    let total = records.len();
    let properties = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            to_property(index, record).inspect_err(|e| warn!(error = %e, "rejected listing record"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog::new(properties, max_pinned)?;
    info!(records = total, pinned = catalog.pinned_count(), "loaded catalog");
    Ok(catalog)
}

pub fn load_from_source(source: &dyn ListingSource, max_pinned: usize) -> Result<Catalog, DomainError> {
    let records = source.fetch()?;
    info!(source = source.name(), records = records.len(), "fetched listing records");
    load_catalog(records, max_pinned)
}

fn to_property(index: usize, record: RawRecord) -> Result<Property, DomainError> {
    let missing = |field: &str| DomainError::malformed(index, format!("missing required field: {field}"));
    let invalid = |field: &str, reason: String| DomainError::malformed(index, format!("{field}: {reason}"));

    let id = record.id.ok_or_else(|| missing("id"))?;
    let address = record
        .address
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| missing("address"))?;
    let property_type: PropertyType = record
        .property_type
        .as_deref()
        .ok_or_else(|| missing("property_type"))?
        .parse()
        .map_err(|e: String| invalid("property_type", e))?;
    let bedrooms = count(record.bedrooms.as_ref().ok_or_else(|| missing("bedrooms"))?)
        .ok_or_else(|| invalid("bedrooms", "not a non-negative count".into()))?;
    let bathrooms = bathroom_count(record.bathrooms.as_ref().ok_or_else(|| missing("bathrooms"))?)
        .ok_or_else(|| invalid("bathrooms", "not a non-negative count".into()))?;
    let annual_revenue = amount(record.annual_revenue.as_ref().ok_or_else(|| missing("annual_revenue"))?)
        .ok_or_else(|| invalid("annual_revenue", "not a non-negative amount".into()))?;
    let adr = amount(record.adr.as_ref().ok_or_else(|| missing("adr"))?)
        .ok_or_else(|| invalid("adr", "not a non-negative amount".into()))?;
    let occupancy = number(record.occupancy.as_ref().ok_or_else(|| missing("occupancy"))?)
        .ok_or_else(|| invalid("occupancy", "not a number".into()))?;
    let occupancy = OccupancyRate::new(occupancy).map_err(|e| invalid("occupancy", e))?;
    let review_count = count(record.review_count.as_ref().ok_or_else(|| missing("review_count"))?)
        .ok_or_else(|| invalid("review_count", "not a non-negative count".into()))?;
    let days_tracked = count(record.days_tracked.as_ref().ok_or_else(|| missing("days_tracked"))?)
        .ok_or_else(|| invalid("days_tracked", "not a non-negative count".into()))?;
    let platforms: Platforms = record
        .platform
        .as_deref()
        .ok_or_else(|| missing("platform"))?
        .parse()
        .map_err(|e: String| invalid("platform", e))?;

    let last_review = record
        .last_review
        .as_deref()
        .map(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d"))
        .transpose()
        .map_err(|e| invalid("last_review", e.to_string()))?;
    let rating = record
        .rating
        .as_ref()
        .map(|raw| number(raw).ok_or_else(|| "not a number".to_string()))
        .transpose()
        .map_err(|e| invalid("rating", e))?
        .map(GuestRating::new)
        .transpose()
        .map_err(|e| invalid("rating", e))?;
    let amenities: BTreeSet<String> = record
        .amenities
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();

    Ok(Property::new(
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
    )
    .with_flags(record.pinned, record.is_base, record.is_target))
}

fn amount(raw: &RawNumber) -> Option<f64> {
    let value = match raw {
        RawNumber::Number(n) => Some(*n),
        RawNumber::Text(s) => parse_amount(s),
    }?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// A plain number, given as JSON number or numeric text.
fn number(raw: &RawNumber) -> Option<f64> {
    let value = match raw {
        RawNumber::Number(n) => *n,
        RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

/// Fractional counts are truncated toward zero.
fn count(raw: &RawNumber) -> Option<u32> {
    number(raw).and_then(truncate_count)
}

/// Bathrooms also arrive as free text ("1.5 baths").
fn bathroom_count(raw: &RawNumber) -> Option<u32> {
    let value = match raw {
        RawNumber::Number(n) => Some(*n),
        RawNumber::Text(s) => parse_leading_number(s),
    }?;
    truncate_count(value)
}

fn truncate_count(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0 && value <= u32::MAX as f64).then(|| value.trunc() as u32)
}
