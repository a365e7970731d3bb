//! Core error types for nineplates-core.
//!
//! Business-rule outcomes (capacity refusal, unknown plate id, rejected
//! deadline edits) are reported through return values, not through these
//! types. [`CoreError`] is what store commands return; configuration calls
//! return [`ConfigError`] directly.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nineplates-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence-related errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by a [`Persistence`](crate::storage::Persistence) backend.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The stored value could not be read
    #[error("Failed to read {location}: {source}")]
    ReadFailed {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The aggregate could not be written
    #[error("Failed to write {location}: {source}")]
    WriteFailed {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored value is not a valid board
    #[error("Stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No platform data directory available
    #[error("Could not determine application data directory")]
    NoDataDir,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming
    #[error("Plate title must not be empty")]
    EmptyTitle,

    /// Consequence outside 1..=9
    #[error("Consequence must be between 1 and 9, got {0}")]
    ConsequenceOutOfRange(i64),

    /// Active plates would not fit in the requested capacity
    #[error("{active} active plates do not fit in a capacity of {capacity}")]
    CapacityExceeded { active: usize, capacity: usize },

    /// Date string could not be parsed
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Plan name not recognised
    #[error("Unknown plan '{0}', expected free, business or entrepreneur")]
    UnknownPlan(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_converts_into_core_error() {
        let err: CoreError = ValidationError::EmptyTitle.into();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyTitle)));
        assert_eq!(err.to_string(), "Validation error: Plate title must not be empty");
    }

    #[test]
    fn write_failure_converts_into_core_error() {
        let err: CoreError = PersistenceError::WriteFailed {
            location: "board.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert!(matches!(err, CoreError::Persistence(PersistenceError::WriteFailed { .. })));
        assert!(err.to_string().starts_with("Persistence error: Failed to write board.json"));
    }

    #[test]
    fn capacity_message_names_both_numbers() {
        let err = ValidationError::CapacityExceeded { active: 12, capacity: 9 };
        assert_eq!(err.to_string(), "12 active plates do not fit in a capacity of 9");
    }
}
