//! # Rounded Box Primitive
//!
//! A rectangular prism whose edges and corners are rounded by taking the
//! convex hull of eight equal spheres.
//!
//! ## Geometry
//!
//! ```text
//!        z = h - r   o-----------o
//!                   /|          /|
//!                  o-----------o |      o = sphere centre, inset by r
//!                  | o---------|-o          from every face
//!                  |/          |/
//!        z = r     o-----------o
//! ```
//!
//! The box occupies `[0, w] × [0, d] × [0, h]`, so it composes with
//! `translate` exactly like a corner-anchored cube.

use glam::DVec3;

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::solid::{hull, Solid};
use crate::volume::minkowski_box_volume;

/// Validated rounded box parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedBox {
    width: f64,
    depth: f64,
    height: f64,
    corner_radius: f64,
}

impl RoundedBox {
    /// Validates the dimensions.
    ///
    /// Every edge must be longer than the two roundings it carries, so
    /// `w`, `d` and `h` must each exceed `2r`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tray_geometry::RoundedBox;
    ///
    /// assert!(RoundedBox::new(45.0, 24.0, 10.0, 2.0).is_ok());
    /// assert!(RoundedBox::new(45.0, 4.0, 10.0, 2.0).is_err());
    /// ```
    pub fn new(width: f64, depth: f64, height: f64, corner_radius: f64) -> GeometryResult<Self> {
        ensure_finite("rounded box", &[width, depth, height, corner_radius])?;
        if corner_radius < 0.0 {
            return Err(GeometryError::degenerate(format!(
                "corner radius must not be negative: {corner_radius}"
            )));
        }
        let limit = 2.0 * corner_radius;
        for (axis, value) in [("width", width), ("depth", depth), ("height", height)] {
            if value <= limit || value <= 0.0 {
                return Err(GeometryError::degenerate(format!(
                    "corner radius {corner_radius} too large for {axis} {value}"
                )));
            }
        }
        Ok(Self {
            width,
            depth,
            height,
            corner_radius,
        })
    }

    /// Outer dimensions.
    pub fn size(&self) -> DVec3 {
        DVec3::new(self.width, self.depth, self.height)
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Exact enclosed volume.
    pub fn volume(&self) -> f64 {
        let r = self.corner_radius;
        minkowski_box_volume(self.size() - DVec3::splat(2.0 * r), r)
    }

    /// Builds the solid. A zero radius yields a plain cube.
    pub fn to_solid(&self) -> GeometryResult<Solid> {
        let r = self.corner_radius;
        if r == 0.0 {
            return Solid::cube(self.size());
        }
        let sphere = Solid::sphere(r)?;
        let far = self.size() - DVec3::splat(r);
        let corners = (0..8).map(|i| {
            DVec3::new(
                if i & 1 == 0 { r } else { far.x },
                if i & 2 == 0 { r } else { far.y },
                if i & 4 == 0 { r } else { far.z },
            )
        });
        Ok(hull(corners.map(|centre| sphere.translate(centre))))
    }
}

/// Rounded box of `width × depth × height` with one corner at the origin.
pub fn rounded_box(
    width: f64,
    depth: f64,
    height: f64,
    corner_radius: f64,
) -> GeometryResult<Solid> {
    RoundedBox::new(width, depth, height, corner_radius)?.to_solid()
}
