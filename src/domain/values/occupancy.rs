use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy rate as a percentage, 0–100.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct OccupancyRate(f64);

impl OccupancyRate {
    pub fn new(value: f64) -> Result<Self, String> {
        if !(0.0..=100.0).contains(&value) {
            return Err(format!(
                "Occupancy rate must be between 0 and 100, got {value}"
            ));
        }
        Ok(OccupancyRate(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for OccupancyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}
