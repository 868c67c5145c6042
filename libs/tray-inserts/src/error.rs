//! # Insert Errors
//!
//! Every failure is detected before boolean composition starts and is fatal
//! for the tray being built. Each kind names the catalog value to fix: the
//! profile step, the cavity, or the label.

use thiserror::Error;
use tray_geometry::{Aabb, GeometryError, LabelError};

use crate::tray::Tray;

/// Errors raised while building one tray.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsertError {
    /// A primitive could not be built from catalog dimensions.
    #[error("Degenerate geometry in {context}: {source}")]
    DegenerateGeometry {
        context: String,
        #[source]
        source: GeometryError,
    },

    /// A cavity lies outside the tray it is carved from.
    #[error("Cavity {cavity} out of bounds: {bounds:?} vs tray envelope {envelope:?}")]
    OutOfBoundsCavity {
        cavity: String,
        bounds: Aabb,
        envelope: Aabb,
    },

    /// The text provider could not produce a label.
    #[error("Label {label:?} failed to render: {source}")]
    LabelRenderingFailure {
        label: String,
        #[source]
        source: LabelError,
    },

    /// A profile breaks its ordering or length invariant.
    #[error("Profile invariant violated at step {index}: {message}")]
    ProfileInvariantViolation { index: usize, message: String },
}

impl InsertError {
    /// Wraps a geometry error with the part that was being built.
    pub fn degenerate(context: impl Into<String>, source: GeometryError) -> Self {
        Self::DegenerateGeometry {
            context: context.into(),
            source,
        }
    }

    pub fn profile(index: usize, message: impl Into<String>) -> Self {
        Self::ProfileInvariantViolation {
            index,
            message: message.into(),
        }
    }
}

/// Result type alias for tray construction.
pub type InsertResult<T> = Result<T, InsertError>;

/// An [`InsertError`] tagged with the tray that failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{tray} tray: {error}")]
pub struct TrayError {
    pub tray: Tray,
    #[source]
    pub error: InsertError,
}

// =============================================================================
// TESTS
// =============================================================================
