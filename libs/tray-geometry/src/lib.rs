//! # Tray Geometry
//!
//! Immutable constructive solid geometry for the tray inserts.
//!
//! ## Architecture
//!
//! ```text
//! primitives (cube, sphere, cylinder, rounded box)
//!       ↓
//! Solid composition (union / difference / intersection / hull)
//!       ↓
//! ScadExporter → <name>.scad
//! ```
//!
//! A [`Solid`] never changes once built. Every operation returns a new value
//! that shares its operands, so solids are cheap to clone and safe to hand
//! to other threads.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use tray_geometry::{difference, rounded_box, Solid};
//!
//! let block = rounded_box(45.0, 24.0, 10.0, 2.0).unwrap();
//! let pocket = Solid::cube(DVec3::new(10.0, 10.0, 20.0))
//!     .unwrap()
//!     .translate(DVec3::new(5.0, 5.0, 1.0));
//! let tray = difference(&block, &pocket);
//!
//! let bounds = tray.bounding_box().unwrap();
//! assert_eq!(bounds.size(), DVec3::new(45.0, 24.0, 10.0));
//! ```

pub mod bounds;
pub mod error;
pub mod export;
pub mod primitives;
pub mod solid;
pub mod text;
mod volume;

pub use bounds::Aabb;
pub use error::{GeometryError, GeometryResult};
pub use export::{ExportError, ScadExporter};
pub use primitives::rounded_box::{rounded_box, RoundedBox};
pub use solid::{difference, hull, intersection, union, RenderMode, Solid, SolidNode};
pub use text::{HAlign, LabelError, ScadTextProvider, TextGeometryProvider, TextStyle, VAlign};
