//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and tools, providing enough context to
//! understand and fix an input problem programmatically.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_m: f64) -> CalcResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "width_m",
//!             width_m.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong.
/// An unknown design code is deliberately *not* an error (see
/// [`crate::design_codes::DesignCode`]), and neither is a batch combination
/// with `L < B`, which is skipped.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A depth falls outside the range covered by the soil profile
    #[error("Depth {depth_m} m is outside the soil profile [{top_m}, {bottom_m}) m")]
    DepthOutOfRange {
        depth_m: f64,
        top_m: f64,
        bottom_m: f64,
    },

    /// Footing width or length is non-positive
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// The stratum table cannot form a soil profile
    #[error("Invalid soil profile: {reason}")]
    InvalidProfile { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DepthOutOfRange error
    pub fn depth_out_of_range(depth_m: f64, top_m: f64, bottom_m: f64) -> Self {
        CalcError::DepthOutOfRange {
            depth_m,
            top_m,
            bottom_m,
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidProfile error
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        CalcError::InvalidProfile {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DepthOutOfRange { .. } => "DEPTH_OUT_OF_RANGE",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidProfile { .. } => "INVALID_PROFILE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry("width_m", "-1.5", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_depth_out_of_range_message() {
        let error = CalcError::depth_out_of_range(12.0, 0.0, 10.0);
        assert_eq!(
            error.to_string(),
            "Depth 12 m is outside the soil profile [0, 10) m"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_profile("empty").error_code(), "INVALID_PROFILE");
        assert_eq!(
            CalcError::depth_out_of_range(-1.0, 0.0, 5.0).error_code(),
            "DEPTH_OUT_OF_RANGE"
        );
        assert_eq!(
            CalcError::invalid_geometry("length_m", "0", "Length must be positive").error_code(),
            "INVALID_GEOMETRY"
        );
    }
}
