use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid filter range for {field}: min {min} > max {max}")]
    InvalidFilterRange { field: String, min: u32, max: u32 },

    #[error("Pin limit exceeded: at most {max} properties can be pinned")]
    PinLimitExceeded { max: usize },

    #[error("Cannot unpin property {0}: clear its base/target designation first")]
    CannotUnpinDesignated(u64),

    #[error("Unknown property: {0}")]
    UnknownProperty(u64),

    #[error("Malformed record {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Listing source error: {0}")]
    Source(String),

    #[error("Catalog lock poisoned")]
    LockPoisoned,
}

impl DomainError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        DomainError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Source(format!("JSON error: {e}"))
    }
}
