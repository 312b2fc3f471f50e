use serde::{Deserialize, Serialize};
use std::fmt;

/// Guest rating on a 0.0–5.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GuestRating(f64);

impl GuestRating {
    pub fn new(value: f64) -> Result<Self, String> {
        if !(0.0..=5.0).contains(&value) {
            return Err(format!("Guest rating must be between 0.0 and 5.0, got {value}"));
        }
        Ok(GuestRating(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for GuestRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
