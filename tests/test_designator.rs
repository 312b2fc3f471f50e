mod common;

use common::sample_catalog;
use compfinder::application::designate::Designator;
use compfinder::domain::entities::catalog::Catalog;
use compfinder::domain::error::DomainError;

fn state(catalog: &Catalog) -> Vec<(u64, bool, bool, bool)> {
    catalog
        .iter()
        .map(|p| (p.id, p.is_pinned(), p.is_base(), p.is_target()))
        .collect()
}

#[test]
fn test_toggle_pin_round_trip() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);

    assert!(d.toggle_pin(&mut catalog, 3).unwrap());
    assert!(catalog.get(3).unwrap().is_pinned());
    assert_eq!(catalog.pinned_count(), 1);

    assert!(!d.toggle_pin(&mut catalog, 3).unwrap());
    assert!(!catalog.get(3).unwrap().is_pinned());
    assert_eq!(catalog.pinned_count(), 0);
}

#[test]
fn test_toggle_unknown_property() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);
    assert!(matches!(
        d.toggle_pin(&mut catalog, 42),
        Err(DomainError::UnknownProperty(42))
    ));
}

#[test]
fn test_pin_limit_leaves_catalog_unchanged() {
    let mut catalog = sample_catalog();
    let d = Designator::new(2);
    d.toggle_pin(&mut catalog, 1).unwrap();
    d.toggle_pin(&mut catalog, 2).unwrap();

    let before = state(&catalog);
    let err = d.toggle_pin(&mut catalog, 3).unwrap_err();
    assert!(matches!(err, DomainError::PinLimitExceeded { max: 2 }));
    assert_eq!(state(&catalog), before);

    // Freeing a slot allows pinning again
    assert!(!d.toggle_pin(&mut catalog, 2).unwrap());
    assert!(d.toggle_pin(&mut catalog, 3).unwrap());
}

#[test]
fn test_cannot_unpin_designated() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);
    d.set_base(&mut catalog, 1).unwrap();
    d.set_target(&mut catalog, 2).unwrap();

    let before = state(&catalog);
    assert!(matches!(
        d.toggle_pin(&mut catalog, 1),
        Err(DomainError::CannotUnpinDesignated(1))
    ));
    assert!(matches!(
        d.toggle_pin(&mut catalog, 2),
        Err(DomainError::CannotUnpinDesignated(2))
    ));
    assert_eq!(state(&catalog), before);

    d.clear_base(&mut catalog);
    assert!(!d.toggle_pin(&mut catalog, 1).unwrap());
}

#[test]
fn test_set_base_forces_pin_and_moves_role() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);

    d.set_base(&mut catalog, 1).unwrap();
    assert!(catalog.get(1).unwrap().is_pinned());
    assert_eq!(catalog.base().unwrap().id, 1);

    d.set_base(&mut catalog, 3).unwrap();
    assert_eq!(catalog.base().unwrap().id, 3);
    let former = catalog.get(1).unwrap();
    assert!(!former.is_base());
    assert!(former.is_pinned(), "former base keeps its pin");
    assert_eq!(catalog.pinned_count(), 2);
    assert!(catalog.verify(10).is_ok());
}

#[test]
fn test_set_target_symmetric() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);

    d.set_target(&mut catalog, 2).unwrap();
    d.set_target(&mut catalog, 5).unwrap();
    assert_eq!(catalog.roles().target, Some(5));
    assert!(!catalog.get(2).unwrap().is_target());
    assert_eq!(catalog.iter().filter(|p| p.is_target()).count(), 1);
}

#[test]
fn test_set_base_is_idempotent() {
    let mut once = sample_catalog();
    let mut twice = sample_catalog();
    let d = Designator::new(10);

    d.set_base(&mut once, 2).unwrap();
    d.set_base(&mut twice, 2).unwrap();
    d.set_base(&mut twice, 2).unwrap();

    assert_eq!(state(&once), state(&twice));
    assert_eq!(once.pinned_count(), twice.pinned_count());
    assert_eq!(once.roles(), twice.roles());
}

#[test]
fn test_set_unknown_property() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);
    assert!(matches!(
        d.set_base(&mut catalog, 77),
        Err(DomainError::UnknownProperty(77))
    ));
    assert!(matches!(
        d.set_target(&mut catalog, 77),
        Err(DomainError::UnknownProperty(77))
    ));
    assert!(catalog.roles().base.is_none());
}

#[test]
fn test_designation_respects_pin_limit() {
    let mut catalog = sample_catalog();
    let d = Designator::new(1);
    d.toggle_pin(&mut catalog, 1).unwrap();

    let before = state(&catalog);
    assert!(matches!(
        d.set_target(&mut catalog, 2),
        Err(DomainError::PinLimitExceeded { max: 1 })
    ));
    assert_eq!(state(&catalog), before);

    // Already pinned: designation needs no extra capacity
    d.set_target(&mut catalog, 1).unwrap();
    assert_eq!(catalog.target().unwrap().id, 1);
}

#[test]
fn test_same_property_may_be_base_and_target() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);
    d.set_base(&mut catalog, 2).unwrap();
    d.set_target(&mut catalog, 2).unwrap();

    let p = catalog.get(2).unwrap();
    assert!(p.is_base() && p.is_target() && p.is_pinned());
    assert_eq!(catalog.pinned_count(), 1);

    d.clear_target(&mut catalog);
    assert!(catalog.get(2).unwrap().is_base());
    assert!(catalog.target().is_none());
}

#[test]
fn test_clear_is_noop_without_holder() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);
    let before = state(&catalog);
    assert_eq!(d.clear_base(&mut catalog), None);
    assert_eq!(d.clear_target(&mut catalog), None);
    assert_eq!(state(&catalog), before);
}

#[test]
fn test_clear_returns_former_holder() {
    let mut catalog = sample_catalog();
    let d = Designator::new(10);
    d.set_target(&mut catalog, 5).unwrap();
    assert_eq!(d.clear_target(&mut catalog), Some(5));
    assert!(catalog.get(5).unwrap().is_pinned());
    assert!(!catalog.get(5).unwrap().is_target());
}

#[test]
fn test_invariants_hold_across_operation_sequence() {
    let mut catalog = sample_catalog();
    let d = Designator::new(3);

    // Deterministic pseudo-random walk over every operation
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let id = seed % 8; // includes unknown ids 0 and 7
        let _ = match (seed >> 8) % 5 {
            0 => d.toggle_pin(&mut catalog, id).map(|_| ()),
            1 => d.set_base(&mut catalog, id),
            2 => d.set_target(&mut catalog, id),
            3 => {
                d.clear_base(&mut catalog);
                Ok(())
            }
            _ => {
                d.clear_target(&mut catalog);
                Ok(())
            }
        };
        catalog.verify(3).unwrap();
    }
}
