//! Source platforms a listing is published on.
//!
//! A listing can be live on one platform or a combination (e.g. "Airbnb + Vrbo"),
//! so the property carries a [`Platforms`] set rather than a single value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Airbnb,
    Vrbo,
    Booking,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Airbnb => write!(f, "Airbnb"),
            Platform::Vrbo => write!(f, "Vrbo"),
            Platform::Booking => write!(f, "Booking"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "airbnb" => Ok(Platform::Airbnb),
            "vrbo" | "homeaway" => Ok(Platform::Vrbo),
            "booking" | "booking.com" => Ok(Platform::Booking),
            _ => Err(format!("Unknown platform: {s}")),
        }
    }
}

/// Non-empty set of platforms a listing is sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platforms(BTreeSet<Platform>);

impl Platforms {
    pub fn new(platforms: impl IntoIterator<Item = Platform>) -> Result<Self, String> {
        let set: BTreeSet<Platform> = platforms.into_iter().collect();
        if set.is_empty() {
            return Err("At least one platform is required".to_string());
        }
        Ok(Platforms(set))
    }

    pub fn single(platform: Platform) -> Self {
        Platforms(BTreeSet::from([platform]))
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.0.contains(&platform)
    }

    pub fn is_subset(&self, other: &Platforms) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.0.iter()
    }
}

impl fmt::Display for Platforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", names.join(" + "))
    }
}

impl FromStr for Platforms {
    type Err = String;

    /// Accepts "Airbnb", "Airbnb + Vrbo", "airbnb,vrbo" and "both".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("both") {
            return Platforms::new([Platform::Airbnb, Platform::Vrbo]);
        }
        let parsed = s
            .split(['+', ',', '/'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Platform::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Platforms::new(parsed)
    }
}

/// Platform criterion for the comparable filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformFilter {
    #[default]
    All,
    /// Listing must be sourced from exactly this set.
    Exact(Platforms),
    /// Listing's sources must be a subset of this set.
    Within(Platforms),
}

impl PlatformFilter {
    pub fn matches(&self, platforms: &Platforms) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Exact(wanted) => wanted == platforms,
            PlatformFilter::Within(allowed) => platforms.is_subset(allowed),
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = String;

    /// `all`, an exact set (`airbnb`, `both`, `airbnb+vrbo`), or `within:<set>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(PlatformFilter::All);
        }
        match trimmed.split_once(':') {
            Some((mode, rest)) if mode.eq_ignore_ascii_case("within") => {
                Ok(PlatformFilter::Within(rest.parse()?))
            }
            _ => Ok(PlatformFilter::Exact(trimmed.parse()?)),
        }
    }
}
