use std::path::PathBuf;

use crate::domain::error::DomainError;
use crate::domain::ports::listing_source::{ListingSource, RawRecord};

/// Reads a JSON array of listing records exported by the upstream pipeline.
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("json:{}", path.display());
        Self { path, name }
    }
}

impl ListingSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<RawRecord>, DomainError> {
        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| DomainError::Source(format!("Cannot read {}: {e}", self.path.display())))?;
        let records: Vec<RawRecord> = serde_json::from_str(&json)?;
        Ok(records)
    }
}
