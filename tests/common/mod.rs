//! Shared test helpers.

#![allow(dead_code)]

use compfinder::application::load_catalog::load_catalog;
use compfinder::config::EngineConfig;
use compfinder::domain::entities::catalog::Catalog;
use compfinder::domain::entities::property::Property;
use compfinder::domain::ports::listing_source::RawRecord;
use compfinder::CompFinder;
use serde_json::json;

/// Barcelona sample listings plus a few edge cases for the reliability filter.
pub fn sample_json() -> serde_json::Value {
    json!([
        {
            "id": 1, "address": "Calle Mayor 123, Barcelona", "property_type": "apartment",
            "bedrooms": 2, "bathrooms": 1, "annual_revenue": 45000, "adr": 125,
            "occupancy": 78, "review_count": 156, "last_review": "2024-01-15",
            "days_tracked": 365, "platform": "Airbnb + Vrbo", "rating": 4.8,
            "amenities": ["Wifi", "Kitchen", "Air conditioning"]
        },
        {
            "id": 2, "address": "Passeig de Gràcia 45, Barcelona", "property_type": "apartment",
            "bedrooms": 3, "bathrooms": 2, "annual_revenue": 68000, "adr": 185,
            "occupancy": 82, "review_count": 243, "last_review": "2024-01-18",
            "days_tracked": 420, "platform": "Airbnb", "rating": 4.9,
            "amenities": ["Wifi", "Kitchen", "Air conditioning", "Balcony"]
        },
        {
            "id": 3, "address": "Carrer del Rec 78, Barcelona", "property_type": "loft",
            "bedrooms": 1, "bathrooms": 1, "annual_revenue": 38000, "adr": 110,
            "occupancy": 75, "review_count": 89, "last_review": "2024-01-12",
            "days_tracked": 280, "platform": "Vrbo", "rating": 4.6,
            "amenities": ["Wifi", "Kitchen"]
        },
        {
            "id": 4, "address": "Carrer de Sants 12, Barcelona", "property_type": "apartment",
            "bedrooms": 2, "bathrooms": 1, "annual_revenue": 30000, "adr": 140,
            "occupancy": 60, "review_count": 5, "days_tracked": 90,
            "platform": "Airbnb"
        },
        {
            "id": 5, "address": "Avinguda Pearson 8, Barcelona", "property_type": "villa",
            "bedrooms": 5, "bathrooms": 3, "annual_revenue": 120000, "adr": 320,
            "occupancy": 70, "review_count": 40, "days_tracked": 300,
            "platform": "Airbnb + Vrbo", "rating": 4.7
        },
        {
            "id": 6, "address": "Carrer Gran de Gràcia 200, Barcelona", "property_type": "house",
            "bedrooms": 4, "bathrooms": 2, "annual_revenue": 52000, "adr": 150,
            "occupancy": 68, "review_count": 20, "days_tracked": 250,
            "platform": "Booking", "rating": 4.4
        }
    ])
}

pub fn sample_records() -> Vec<RawRecord> {
    serde_json::from_value(sample_json()).unwrap()
}

pub fn sample_catalog() -> Catalog {
    load_catalog(sample_records(), EngineConfig::default().max_pinned).unwrap()
}

pub fn setup() -> CompFinder {
    CompFinder::from_records(EngineConfig::default(), sample_records()).unwrap()
}

pub fn setup_with(config: EngineConfig) -> CompFinder {
    CompFinder::from_records(config, sample_records()).unwrap()
}

pub fn ids<'a>(properties: impl IntoIterator<Item = &'a Property>) -> Vec<u64> {
    properties.into_iter().map(|p| p.id).collect()
}
