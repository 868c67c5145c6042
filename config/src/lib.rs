//! # Config Crate
//!
//! Catalog of every fixed dimension used by the tray insert generators.
//! Physical item footprints, clearances, label styling and the export
//! resolution are defined here once and handed to the builders as an
//! explicit [`catalog::TrayCatalog`] record.
//!
//! ## Usage
//!
//! ```rust
//! use config::catalog::TrayCatalog;
//! use config::constants::{CORNER_RADIUS, FLOOR_THICKNESS};
//!
//! let catalog = TrayCatalog::default();
//! assert!(catalog.validate().is_ok());
//! assert_eq!(catalog.corner_radius, CORNER_RADIUS);
//! assert_eq!(catalog.floor, FLOOR_THICKNESS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every catalog value is a named constant
//! - **Explicit Record**: builders receive a `TrayCatalog`, never globals
//! - **Compile-Time Only**: nothing is read from disk at run time

pub mod catalog;
pub mod constants;

pub use catalog::{ConfigError, Piece, TrayCatalog};

#[cfg(test)]
mod tests;
