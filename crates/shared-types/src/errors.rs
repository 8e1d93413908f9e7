//! Common error types used across all GeoStress Charts crates

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for GeoStress Charts operations.
///
/// The core layer converts most of these to fallback behavior (placeholder
/// renders, empty data, factory-fresh state) at the owner boundary; the
/// variants exist so callers that need the reason can still get it.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GeoStressError {
    #[error("Unknown visualization kind: {kind}")]
    UnknownKind { kind: String },

    #[error("Persisted state type '{found}' does not match kind '{expected}'")]
    StateTypeMismatch { expected: String, found: String },

    #[error("Column not found: {key}")]
    ColumnNotFound { key: String },

    #[error("Invalid descriptor: {message}")]
    InvalidDescriptor { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Instance not found: {id}")]
    InstanceNotFound { id: String },

    #[error("Inversion failed: {message}")]
    Inversion { message: String },
}

/// Result type alias for GeoStress Charts operations.
pub type Result<T> = std::result::Result<T, GeoStressError>;

impl From<serde_json::Error> for GeoStressError {
    fn from(err: serde_json::Error) -> Self {
        GeoStressError::Serialization {
            message: err.to_string(),
        }
    }
}
