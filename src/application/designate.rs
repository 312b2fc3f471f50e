//! Comparable designator.
//!
//! Every operation validates first and mutates second, so a failed call
//! leaves the catalog exactly as it was.

use tracing::{info, warn};

use crate::domain::entities::catalog::{Catalog, Role};
use crate::domain::entities::property::PropertyId;
use crate::domain::error::DomainError;

pub struct Designator {
    max_pinned: usize,
}

impl Designator {
    pub fn new(max_pinned: usize) -> Self {
        Self { max_pinned }
    }

    pub fn max_pinned(&self) -> usize {
        self.max_pinned
    }

    /// Flip the pinned flag. Returns the new pinned state.
    ///
    /// Pinning past the bound fails with `PinLimitExceeded`; unpinning a base
    /// or target fails with `CannotUnpinDesignated`.
    pub fn toggle_pin(&self, catalog: &mut Catalog, id: PropertyId) -> Result<bool, DomainError> {
        let pos = catalog.position(id)?;
        let property = catalog.property_at(pos);

        if property.is_pinned() {
            if property.is_designated() {
                warn!(property_id = id, "rejected unpin of designated comparable");
                return Err(DomainError::CannotUnpinDesignated(id));
            }
            catalog.set_pinned_at(pos, false);
            info!(property_id = id, pinned = catalog.pinned_count(), "unpinned comparable");
            return Ok(false);
        }

        self.ensure_pin_capacity(catalog, id)?;
        catalog.set_pinned_at(pos, true);
        info!(property_id = id, pinned = catalog.pinned_count(), "pinned comparable");
        Ok(true)
    }

    pub fn set_base(&self, catalog: &mut Catalog, id: PropertyId) -> Result<(), DomainError> {
        self.designate(catalog, Role::Base, id)
    }

    pub fn set_target(&self, catalog: &mut Catalog, id: PropertyId) -> Result<(), DomainError> {
        self.designate(catalog, Role::Target, id)
    }

    /// The former base stays pinned.
    pub fn clear_base(&self, catalog: &mut Catalog) -> Option<PropertyId> {
        self.clear(catalog, Role::Base)
    }

    pub fn clear_target(&self, catalog: &mut Catalog) -> Option<PropertyId> {
        self.clear(catalog, Role::Target)
    }

    /// Move `role` to `id` and force it pinned. The previous holder keeps its pin.
    /// A property may hold both roles at once.
    fn designate(&self, catalog: &mut Catalog, role: Role, id: PropertyId) -> Result<(), DomainError> {
        let pos = catalog.position(id)?;

        if !catalog.property_at(pos).is_pinned() {
            self.ensure_pin_capacity(catalog, id)?;
        }

        catalog.set_pinned_at(pos, true);
        let previous = catalog.assign_role_at(role, pos);
        info!(property_id = id, ?previous, %role, "designated comparable");
        Ok(())
    }

    fn clear(&self, catalog: &mut Catalog, role: Role) -> Option<PropertyId> {
        let previous = catalog.clear_role(role);
        if let Some(id) = previous {
            info!(property_id = id, %role, "cleared designation");
        }
        previous
    }

    fn ensure_pin_capacity(&self, catalog: &Catalog, id: PropertyId) -> Result<(), DomainError> {
        if catalog.pinned_count() >= self.max_pinned {
            warn!(property_id = id, max = self.max_pinned, "pin limit reached");
            return Err(DomainError::PinLimitExceeded {
                max: self.max_pinned,
            });
        }
        Ok(())
    }
}
