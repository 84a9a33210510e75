//! # Error Types
//!
//! Structured error types for estimate_core. Every variant carries enough
//! context for a front end to tell the user which field to fix.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_length(length_m: f64) -> EstimateResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "length",
//!             length_m.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimate_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation and registry operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (not a number, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// No material was selected for the estimate
    #[error("Select at least one material")]
    EmptySelection,

    /// A material line index does not exist
    #[error("Line index {index} out of range (sheet has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A form failed a validation rule (login/signup)
    #[error("{message}")]
    ValidationFailed { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        EstimateError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ValidationFailed error
    pub fn validation(message: impl Into<String>) -> Self {
        EstimateError::ValidationFailed {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::MissingField { .. } => "MISSING_FIELD",
            EstimateError::EmptySelection => "EMPTY_SELECTION",
            EstimateError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            EstimateError::ValidationFailed { .. } => "VALIDATION_FAILED",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        EstimateError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EstimateError::invalid_input("length", "abc", "Not a number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(EstimateError::missing_field("height").error_code(), "MISSING_FIELD");
        assert_eq!(EstimateError::EmptySelection.error_code(), "EMPTY_SELECTION");
        assert_eq!(
            EstimateError::IndexOutOfRange { index: 4, len: 2 }.error_code(),
            "INDEX_OUT_OF_RANGE"
        );
    }

    #[test]
    fn test_validation_message_is_displayed_verbatim() {
        let error = EstimateError::validation("Passwords do not match");
        assert_eq!(error.to_string(), "Passwords do not match");
    }
}
