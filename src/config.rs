//! Engine configuration.
//!
//! Every tunable constant (pin bound, reliability thresholds, tier
//! boundaries, scenario percentages) lives here so behavior is reproducible.
//! Loaded from JSON, with `COMPFINDER_*` environment overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::application::filter::ReliabilityDefaults;
use crate::domain::error::DomainError;
use crate::domain::values::scenario::ScenarioConfig;
use crate::domain::values::tier::TierThresholds;

pub const CONFIG_PATH_ENV: &str = "COMPFINDER_CONFIG";
pub const MAX_PINNED_ENV: &str = "COMPFINDER_MAX_PINNED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on simultaneously pinned comparables.
    pub max_pinned: usize,
    pub reliability: ReliabilityDefaults,
    pub tiers: TierThresholds,
    pub scenarios: ScenarioConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_pinned: 10,
            reliability: ReliabilityDefaults::default(),
            tiers: TierThresholds::default(),
            scenarios: ScenarioConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| DomainError::Config(format!("Invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Config(format!("Cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Defaults, then the file named by `COMPFINDER_CONFIG` (if set), then
    /// `COMPFINDER_MAX_PINNED`.
    pub fn from_env() -> Result<Self, DomainError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(path)?,
            _ => Self::default(),
        };

        if let Ok(raw) = std::env::var(MAX_PINNED_ENV) {
            config.max_pinned = raw.trim().parse().map_err(|_| {
                DomainError::Config(format!("{MAX_PINNED_ENV} must be a positive integer, got '{raw}'"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_pinned == 0 {
            return Err(DomainError::Config("max_pinned must be at least 1".into()));
        }
        self.tiers.validate().map_err(DomainError::Config)?;
        self.scenarios.validate().map_err(DomainError::Config)?;
        Ok(())
    }
}
