//! Reliability & attribute filter.
//!
//! Reduces a catalog to the comparables worth trusting. Structural criteria
//! (bedrooms, bathrooms, platform, type) are optional, but the two reliability
//! thresholds always apply: when the caller leaves them unset the configured
//! defaults are used.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::catalog::Catalog;
use crate::domain::entities::property::Property;
use crate::domain::error::DomainError;
use crate::domain::values::platform::PlatformFilter;
use crate::domain::values::property_type::PropertyTypeFilter;

/// Inclusive `[min, max]` count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    fn validate(&self, field: &str) -> Result<(), DomainError> {
        if self.min > self.max {
            return Err(DomainError::InvalidFilterRange {
                field: field.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Reliability thresholds applied when criteria leave them unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityDefaults {
    pub min_reviews: u32,
    /// Guards against projections built on a partial season.
    pub min_days_tracked: u32,
}

impl Default for ReliabilityDefaults {
    fn default() -> Self {
        Self {
            min_reviews: 20,
            min_days_tracked: 250,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub bedrooms: Option<CountRange>,
    pub bathrooms: Option<CountRange>,
    pub min_reviews: Option<u32>,
    pub min_days_tracked: Option<u32>,
    pub platform: PlatformFilter,
    pub property_type: PropertyTypeFilter,
}

impl FilterCriteria {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(range) = &self.bedrooms {
            range.validate("bedrooms")?;
        }
        if let Some(range) = &self.bathrooms {
            range.validate("bathrooms")?;
        }
        Ok(())
    }

    /// Criteria with the reliability thresholds resolved.
    fn resolve(&self, defaults: &ReliabilityDefaults) -> ResolvedCriteria<'_> {
        ResolvedCriteria {
            criteria: self,
            min_reviews: self.min_reviews.unwrap_or(defaults.min_reviews),
            min_days_tracked: self.min_days_tracked.unwrap_or(defaults.min_days_tracked),
        }
    }
}

struct ResolvedCriteria<'a> {
    criteria: &'a FilterCriteria,
    min_reviews: u32,
    min_days_tracked: u32,
}

impl ResolvedCriteria<'_> {
    fn matches(&self, p: &Property) -> bool {
        let c = self.criteria;
        c.bedrooms.map_or(true, |r| r.contains(p.bedrooms))
            && c.bathrooms.map_or(true, |r| r.contains(p.bathrooms))
            && p.review_count >= self.min_reviews
            && p.days_tracked >= self.min_days_tracked
            && c.platform.matches(&p.platforms)
            && c.property_type.matches(p.property_type)
    }
}

/// Filter any sequence of properties. Order-preserving; never touches flags.
pub fn filter_properties<'a, I>(
    properties: I,
    criteria: &FilterCriteria,
    defaults: &ReliabilityDefaults,
) -> Result<Vec<&'a Property>, DomainError>
where
    I: IntoIterator<Item = &'a Property>,
{
    criteria.validate()?;
    let resolved = criteria.resolve(defaults);

    let mut total = 0usize;
    let kept: Vec<&Property> = properties
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|p| resolved.matches(p))
        .collect();

    debug!(
        total,
        kept = kept.len(),
        min_reviews = resolved.min_reviews,
        min_days_tracked = resolved.min_days_tracked,
        "filtered comparables"
    );
    Ok(kept)
}

pub fn filter<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    defaults: &ReliabilityDefaults,
) -> Result<Vec<&'a Property>, DomainError> {
    filter_properties(catalog.iter(), criteria, defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_range() {
        let r = CountRange::new(1, 3);
        assert!(r.contains(1));
        assert!(r.contains(3));
        assert!(!r.contains(0));
        assert!(!r.contains(4));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let criteria = FilterCriteria {
            bathrooms: Some(CountRange::new(3, 1)),
            ..Default::default()
        };
        match criteria.validate() {
            Err(DomainError::InvalidFilterRange { field, min, max }) => {
                assert_eq!(field, "bathrooms");
                assert_eq!((min, max), (3, 1));
            }
            other => panic!("expected InvalidFilterRange, got {other:?}"),
        }
    }

    #[test]
    fn test_unset_thresholds_use_defaults() {
        let criteria = FilterCriteria::default();
        let resolved = criteria.resolve(&ReliabilityDefaults::default());
        assert_eq!(resolved.min_reviews, 20);
        assert_eq!(resolved.min_days_tracked, 250);

        let criteria = FilterCriteria {
            min_reviews: Some(0),
            ..Default::default()
        };
        let resolved = criteria.resolve(&ReliabilityDefaults::default());
        assert_eq!(resolved.min_reviews, 0);
        assert_eq!(resolved.min_days_tracked, 250);
    }
}
