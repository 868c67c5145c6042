//! # Geometry Errors
//!
//! Error types for primitive construction.
//!
//! ## Error Policy
//!
//! - Invalid dimensions are rejected when the primitive is built
//! - No clamping or silent repair of degenerate inputs

use thiserror::Error;

/// Errors that can occur while building primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Dimensions that would produce a negative, empty or self-intersecting
    /// shape.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A non-finite value was supplied.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl GeometryError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for primitive construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Rejects NaN and infinite inputs before any other validation.
pub(crate) fn ensure_finite(what: &str, values: &[f64]) -> GeometryResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::invalid_argument(format!(
            "{what} dimensions must be finite: {values:?}"
        )))
    }
}

// =============================================================================
// TESTS
// =============================================================================
