//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::CategoryValidationError;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for preferences and other input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A category was rejected before being appended
    #[error("Invalid category: {0}")]
    InvalidCategory(#[from] CategoryValidationError),

    /// Reading from the key-value store failed or returned unusable data
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Writing to the key-value store failed
    #[error("Storage write error: {0}")]
    StorageWrite(String),
}

impl TallyError {
    /// Check if this is a category validation error
    pub fn is_invalid_category(&self) -> bool {
        matches!(self, Self::InvalidCategory(_))
    }

    /// Check if this is a storage write error
    pub fn is_storage_write(&self) -> bool {
        matches!(self, Self::StorageWrite(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;
