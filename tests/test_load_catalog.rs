mod common;

use common::{sample_json, sample_records};
use compfinder::application::load_catalog::{load_catalog, load_from_source};
use compfinder::domain::error::DomainError;
use compfinder::domain::ports::listing_source::RawRecord;
use compfinder::domain::values::platform::Platform;
use compfinder::domain::values::property_type::PropertyType;
use compfinder::infrastructure::sources::json_file::JsonFileSource;
use compfinder::infrastructure::sources::memory::InMemorySource;
use serde_json::json;
use std::io::Write;

fn records(value: serde_json::Value) -> Vec<RawRecord> {
    serde_json::from_value(value).unwrap()
}

fn assert_malformed(result: Result<impl std::fmt::Debug, DomainError>, expected_index: usize, needle: &str) {
    match result {
        Err(DomainError::MalformedRecord { index, reason }) => {
            assert_eq!(index, expected_index);
            assert!(reason.contains(needle), "reason '{reason}' should mention '{needle}'");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_load_sample_catalog() {
    let catalog = load_catalog(sample_records(), 10).unwrap();
    assert_eq!(catalog.len(), 6);

    let p = catalog.get(2).unwrap();
    assert_eq!(p.address, "Passeig de Gràcia 45, Barcelona");
    assert_eq!(p.property_type, PropertyType::Apartment);
    assert_eq!(p.annual_revenue, 68_000.0);
    assert_eq!(p.adr, 185.0);
    assert_eq!(p.occupancy.value(), 82.0);
    assert_eq!(p.last_review.unwrap().to_string(), "2024-01-18");
    assert!(p.has_amenity("balcony"));
    assert!(!p.is_pinned());

    let combo = catalog.get(1).unwrap();
    assert!(combo.platforms.contains(Platform::Airbnb));
    assert!(combo.platforms.contains(Platform::Vrbo));

    assert!(catalog.get(4).unwrap().rating.is_none());
    assert!(catalog.get(99).is_none());
}

#[test]
fn test_load_preserves_order() {
    let catalog = load_catalog(sample_records(), 10).unwrap();
    let ids: Vec<u64> = catalog.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_camel_case_upstream_shape() {
    let catalog = load_catalog(
        records(json!([{
            "id": 7, "address": "Carrer del Rec 78, Barcelona", "type": "Loft",
            "bedrooms": 1, "bathrooms": 1, "annualRevenue": 38000, "adr": 110,
            "occupancyRate": 75, "reviews": 89, "lastReview": "2024-01-12",
            "daysTracked": 280, "platform": "Vrbo", "rating": 4.6,
            "amenities": ["Wifi"], "isPinned": true, "isBase": true, "isTarget": false
        }])),
        10,
    )
    .unwrap();
    let p = catalog.get(7).unwrap();
    assert_eq!(p.property_type, PropertyType::Loft);
    assert_eq!(p.review_count, 89);
    assert!(p.is_pinned());
    assert!(p.is_base());
    assert_eq!(catalog.roles().base, Some(7));
}

#[test]
fn test_text_prices_and_bathrooms() {
    let catalog = load_catalog(
        records(json!([{
            "id": 1, "address": "Gran Via 1, Madrid", "property_type": "apartment",
            "bedrooms": 2, "bathrooms_text": "1.5 baths", "annual_revenue": "€41,500",
            "price": "$120.00", "occupancy": 70, "review_count": 30,
            "days_tracked": 300, "platform": "airbnb"
        }])),
        10,
    )
    .unwrap();
    let p = catalog.get(1).unwrap();
    assert_eq!(p.bathrooms, 1);
    assert_eq!(p.annual_revenue, 41_500.0);
    assert_eq!(p.adr, 120.0);
}

#[test]
fn test_missing_required_field() {
    let mut value = sample_json();
    value[2].as_object_mut().unwrap().remove("days_tracked");
    assert_malformed(load_catalog(records(value), 10), 2, "days_tracked");
}

#[test]
fn test_unparseable_price() {
    let mut value = sample_json();
    value[0]["adr"] = json!("ask host");
    assert_malformed(load_catalog(records(value), 10), 0, "adr");

    for garbage in ["2 x 60", "100 to 150", "12abc34"] {
        let mut value = sample_json();
        value[3]["adr"] = json!(garbage);
        assert_malformed(load_catalog(records(value), 10), 3, "adr");
    }

    let mut value = sample_json();
    value[1]["annual_revenue"] = json!("68k");
    assert_malformed(load_catalog(records(value), 10), 1, "annual_revenue");
}

#[test]
fn test_mistyped_counts_are_per_record() {
    let mut value = sample_json();
    value[0]["bedrooms"] = json!(2.5);
    value[1]["review_count"] = json!("243");
    value[2]["occupancy"] = json!("75");
    value[2]["rating"] = json!("4.6");
    let catalog = load_catalog(records(value), 10).unwrap();
    assert_eq!(catalog.get(1).unwrap().bedrooms, 2);
    assert_eq!(catalog.get(2).unwrap().review_count, 243);
    assert_eq!(catalog.get(3).unwrap().occupancy.value(), 75.0);
    assert_eq!(catalog.get(3).unwrap().rating.unwrap().value(), 4.6);

    let mut value = sample_json();
    value[4]["days_tracked"] = json!("all season");
    assert_malformed(load_catalog(records(value), 10), 4, "days_tracked");

    let mut value = sample_json();
    value[5]["bedrooms"] = json!("four");
    assert_malformed(load_catalog(records(value), 10), 5, "bedrooms");
}

#[test]
fn test_out_of_range_values() {
    let mut value = sample_json();
    value[1]["occupancy"] = json!(120);
    assert_malformed(load_catalog(records(value), 10), 1, "occupancy");

    let mut value = sample_json();
    value[1]["rating"] = json!(5.5);
    assert_malformed(load_catalog(records(value), 10), 1, "rating");

    let mut value = sample_json();
    value[1]["annual_revenue"] = json!(-100);
    assert_malformed(load_catalog(records(value), 10), 1, "annual_revenue");
}

#[test]
fn test_unknown_platform_and_type() {
    let mut value = sample_json();
    value[3]["platform"] = json!("Expedia");
    assert_malformed(load_catalog(records(value), 10), 3, "platform");

    let mut value = sample_json();
    value[3]["property_type"] = json!("castle");
    assert_malformed(load_catalog(records(value), 10), 3, "property_type");
}

#[test]
fn test_bad_last_review_date() {
    let mut value = sample_json();
    value[0]["last_review"] = json!("15/01/2024");
    assert_malformed(load_catalog(records(value), 10), 0, "last_review");
}

#[test]
fn test_duplicate_ids_rejected() {
    let mut value = sample_json();
    value[4]["id"] = json!(2);
    assert_malformed(load_catalog(records(value), 10), 4, "duplicate");
}

#[test]
fn test_incoming_flags_must_hold_invariants() {
    let mut value = sample_json();
    value[0]["is_base"] = json!(true);
    assert_malformed(load_catalog(records(value), 10), 0, "not pinned");

    let mut value = sample_json();
    for i in [0usize, 1] {
        value[i]["pinned"] = json!(true);
        value[i]["is_target"] = json!(true);
    }
    assert_malformed(load_catalog(records(value), 10), 1, "target");

    let mut value = sample_json();
    for i in 0..3usize {
        value[i]["pinned"] = json!(true);
    }
    assert_malformed(load_catalog(records(value), 2), 2, "pinned");
}

#[test]
fn test_json_file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", sample_json()).unwrap();

    let source = JsonFileSource::new(file.path());
    let catalog = load_from_source(&source, 10).unwrap();
    assert_eq!(catalog.len(), 6);
}

#[test]
fn test_json_file_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonFileSource::new(dir.path().join("missing.json"));
    assert!(matches!(load_from_source(&source, 10), Err(DomainError::Source(_))));
}

#[test]
fn test_json_file_source_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[{{\"id\": ").unwrap();
    let source = JsonFileSource::new(file.path());
    assert!(matches!(load_from_source(&source, 10), Err(DomainError::Source(_))));
}

#[test]
fn test_in_memory_source() {
    let source = InMemorySource::new(sample_records());
    let catalog = load_from_source(&source, 10).unwrap();
    assert_eq!(catalog.len(), 6);
    assert!(catalog.verify(10).is_ok());
}
