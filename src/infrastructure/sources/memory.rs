use crate::domain::error::DomainError;
use crate::domain::ports::listing_source::{ListingSource, RawRecord};

/// Records already held in memory, e.g. handed over by a host application.
pub struct InMemorySource {
    records: Vec<RawRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl ListingSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(&self) -> Result<Vec<RawRecord>, DomainError> {
        Ok(self.records.clone())
    }
}
