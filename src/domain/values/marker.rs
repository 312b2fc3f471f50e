use serde::Serialize;

use crate::domain::entities::property::Property;

/// How a property is drawn on the comparables map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStatus {
    Target,
    Base,
    Pinned,
    Regular,
}

impl MarkerStatus {
    /// Target wins over base, base over pinned.
    pub fn of(property: &Property) -> Self {
        if property.is_target() {
            MarkerStatus::Target
        } else if property.is_base() {
            MarkerStatus::Base
        } else if property.is_pinned() {
            MarkerStatus::Pinned
        } else {
            MarkerStatus::Regular
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MarkerStatus::Target => "#3b82f6",
            MarkerStatus::Base => "#10b981",
            MarkerStatus::Pinned => "#f59e0b",
            MarkerStatus::Regular => "#6b7280",
        }
    }
}
