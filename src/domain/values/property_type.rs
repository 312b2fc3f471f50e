use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Loft,
    Villa,
    Studio,
    Other,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Apartment => write!(f, "apartment"),
            PropertyType::House => write!(f, "house"),
            PropertyType::Loft => write!(f, "loft"),
            PropertyType::Villa => write!(f, "villa"),
            PropertyType::Studio => write!(f, "studio"),
            PropertyType::Other => write!(f, "other"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apartment" | "flat" | "condo" => Ok(PropertyType::Apartment),
            "house" | "home" => Ok(PropertyType::House),
            "loft" => Ok(PropertyType::Loft),
            "villa" => Ok(PropertyType::Villa),
            "studio" => Ok(PropertyType::Studio),
            "other" => Ok(PropertyType::Other),
            _ => Err(format!("Unknown property type: {s}")),
        }
    }
}

/// Property type criterion: `all` passes everything, otherwise exact match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyTypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl PropertyTypeFilter {
    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            PropertyTypeFilter::All => true,
            PropertyTypeFilter::Only(wanted) => *wanted == property_type,
        }
    }
}

impl FromStr for PropertyTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PropertyTypeFilter::All);
        }
        s.parse().map(PropertyTypeFilter::Only)
    }
}
