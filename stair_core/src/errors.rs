//! # Error Types
//!
//! Structured error types for stair_core. Numeric edge cases in the
//! calculation stage never surface here (the engine degrades to zeroed
//! results instead); errors are reserved for structurally invalid layout
//! requests and bad interactive input.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::errors::{StairError, StairResult};
//!
//! fn validate_height(height_in: f64) -> StairResult<()> {
//!     if height_in <= 0.0 {
//!         return Err(StairError::InvalidInput {
//!             field: "overall_height_in".to_string(),
//!             value: height_in.to_string(),
//!             reason: "Overall height must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stair_core operations
pub type StairResult<T> = Result<T, StairError>;

/// Structured error type for stair generation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by front ends.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StairError {
    /// An input value is invalid (out of range, contradictory, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A mandatory mid-landing has no position selected.
    ///
    /// Raised by the layout planner when `requires_midlanding` is set but
    /// no tread index was supplied by the caller.
    #[error("Midlanding position required but not supplied (valid range: 0..{number_of_treads})")]
    MissingMidlandingIndex { number_of_treads: usize },

    /// A supplied mid-landing position falls outside the tread range.
    #[error("Midlanding position {index} is out of range (valid range: 0..{number_of_treads})")]
    MidlandingIndexOutOfRange {
        index: usize,
        number_of_treads: usize,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl StairError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StairError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StairError::InvalidInput { .. } => "INVALID_INPUT",
            StairError::MissingMidlandingIndex { .. } => "MISSING_MIDLANDING_INDEX",
            StairError::MidlandingIndexOutOfRange { .. } => "MIDLANDING_INDEX_OUT_OF_RANGE",
            StairError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = StairError::invalid_input(
            "overall_height_in",
            "-5.0",
            "Overall height must be positive",
        );
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: StairError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StairError::MissingMidlandingIndex {
                number_of_treads: 13
            }
            .error_code(),
            "MISSING_MIDLANDING_INDEX"
        );
        assert_eq!(
            StairError::invalid_input("x", "0", "bad").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_display_includes_range() {
        let err = StairError::MidlandingIndexOutOfRange {
            index: 14,
            number_of_treads: 13,
        };
        assert!(err.to_string().contains("0..13"));
    }
}
