//! The in-memory property catalog.
//!
//! Base and target designations are tracked in a [`RoleIndex`] (role → holder id)
//! that is updated together with the per-property flags, so "at most one base,
//! at most one target" holds by construction rather than by rescanning.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::domain::entities::property::{Property, PropertyId};
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Base,
    Target,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Base => write!(f, "base"),
            Role::Target => write!(f, "target"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleIndex {
    pub base: Option<PropertyId>,
    pub target: Option<PropertyId>,
}

impl RoleIndex {
    pub fn get(&self, role: Role) -> Option<PropertyId> {
        match role {
            Role::Base => self.base,
            Role::Target => self.target,
        }
    }

    fn slot(&mut self, role: Role) -> &mut Option<PropertyId> {
        match role {
            Role::Base => &mut self.base,
            Role::Target => &mut self.target,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    properties: Vec<Property>,
    #[serde(skip)]
    index: HashMap<PropertyId, usize>,
    roles: RoleIndex,
    pinned_count: usize,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and any initial flags that
    /// violate the designation invariants.
    pub fn new(properties: Vec<Property>, max_pinned: usize) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(properties.len());
        let mut roles = RoleIndex::default();
        let mut pinned_count = 0usize;

        for (i, property) in properties.iter().enumerate() {
            if index.insert(property.id, i).is_some() {
                return Err(DomainError::malformed(
                    i,
                    format!("duplicate property id {}", property.id),
                ));
            }
            if property.is_designated() && !property.is_pinned() {
                return Err(DomainError::malformed(
                    i,
                    format!("property {} is base/target but not pinned", property.id),
                ));
            }
            if property.is_pinned() {
                pinned_count += 1;
                if pinned_count > max_pinned {
                    return Err(DomainError::malformed(
                        i,
                        format!("more than {max_pinned} pinned properties"),
                    ));
                }
            }
            for (role, flagged) in [
                (Role::Base, property.is_base()),
                (Role::Target, property.is_target()),
            ] {
                if !flagged {
                    continue;
                }
                let slot = roles.slot(role);
                if let Some(existing) = slot {
                    return Err(DomainError::malformed(
                        i,
                        format!("properties {existing} and {} are both {role}", property.id),
                    ));
                }
                *slot = Some(property.id);
            }
        }

        Ok(Self {
            properties,
            index,
            roles,
            pinned_count,
        })
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Properties in load order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn get(&self, id: PropertyId) -> Option<&Property> {
        self.index.get(&id).map(|&i| &self.properties[i])
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn pinned(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_pinned())
    }

    pub fn pinned_count(&self) -> usize {
        self.pinned_count
    }

    pub fn roles(&self) -> RoleIndex {
        self.roles
    }

    pub fn holder(&self, role: Role) -> Option<&Property> {
        self.roles.get(role).and_then(|id| self.get(id))
    }

    pub fn base(&self) -> Option<&Property> {
        self.holder(Role::Base)
    }

    pub fn target(&self) -> Option<&Property> {
        self.holder(Role::Target)
    }

    /// Re-derive every invariant from the flags. Used by tests and debug checks.
    pub fn verify(&self, max_pinned: usize) -> Result<(), String> {
        let bases: Vec<PropertyId> = self.iter().filter(|p| p.is_base()).map(|p| p.id).collect();
        let targets: Vec<PropertyId> = self.iter().filter(|p| p.is_target()).map(|p| p.id).collect();
        let pinned = self.pinned().count();

        if bases.len() > 1 || targets.len() > 1 {
            return Err(format!("multiple designations: base {bases:?}, target {targets:?}"));
        }
        if bases.first().copied() != self.roles.base || targets.first().copied() != self.roles.target {
            return Err(format!("role index {:?} out of sync with flags", self.roles));
        }
        if let Some(p) = self.iter().find(|p| p.is_designated() && !p.is_pinned()) {
            return Err(format!("property {} is designated but not pinned", p.id));
        }
        if pinned != self.pinned_count {
            return Err(format!("pinned count {} != tracked {}", pinned, self.pinned_count));
        }
        if pinned > max_pinned {
            return Err(format!("{pinned} pinned exceeds limit {max_pinned}"));
        }
        Ok(())
    }

    pub(crate) fn position(&self, id: PropertyId) -> Result<usize, DomainError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(DomainError::UnknownProperty(id))
    }

    pub(crate) fn property_at(&self, pos: usize) -> &Property {
        &self.properties[pos]
    }

    pub(crate) fn set_pinned_at(&mut self, pos: usize, pinned: bool) {
        let property = &mut self.properties[pos];
        if property.is_pinned() == pinned {
            return;
        }
        property.set_pinned(pinned);
        if pinned {
            self.pinned_count += 1;
        } else {
            self.pinned_count -= 1;
        }
    }

    /// Move `role` to the property at `pos`, clearing the previous holder's flag.
    pub(crate) fn assign_role_at(&mut self, role: Role, pos: usize) -> Option<PropertyId> {
        let previous = self.clear_role(role);
        let property = &mut self.properties[pos];
        match role {
            Role::Base => property.set_base(true),
            Role::Target => property.set_target(true),
        }
        *self.roles.slot(role) = Some(property.id);
        previous
    }

    pub(crate) fn clear_role(&mut self, role: Role) -> Option<PropertyId> {
        let previous = self.roles.slot(role).take()?;
        if let Some(&pos) = self.index.get(&previous) {
            let property = &mut self.properties[pos];
            match role {
                Role::Base => property.set_base(false),
                Role::Target => property.set_target(false),
            }
        }
        Some(previous)
    }
}
