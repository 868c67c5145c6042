//! Closed-form volumes for the subset of trees that have one.

use std::f64::consts::PI;

use glam::DVec3;

use crate::solid::{Solid, SolidNode};

/// Volume of an `a × b × c` box grown by a ball of radius `r`.
///
/// This is also the volume of the hull of eight radius-`r` spheres centred on
/// the corners of that box. Any of `a`, `b`, `c` may be zero.
pub fn minkowski_box_volume(core: DVec3, r: f64) -> f64 {
    let (a, b, c) = (core.x, core.y, core.z);
    a * b * c
        + 2.0 * r * (a * b + b * c + c * a)
        + PI * r * r * (a + b + c)
        + 4.0 / 3.0 * PI * r * r * r
}

impl Solid {
    /// Exact volume when the tree has a closed form, otherwise `None`.
    ///
    /// Supported: primitives, rigid transforms of them, hulls of equal
    /// spheres on the corners of an axis-aligned box, and booleans with a
    /// single final operand. The empty solid has volume zero.
    pub fn volume(&self) -> Option<f64> {
        match self.node() {
            SolidNode::Empty => Some(0.0),
            SolidNode::Cube { size } => Some(size.x * size.y * size.z),
            SolidNode::Sphere { radius } => Some(4.0 / 3.0 * PI * radius.powi(3)),
            SolidNode::Cylinder {
                height,
                radius_bottom,
                radius_top,
            } => Some(
                PI * height / 3.0
                    * (radius_bottom * radius_bottom
                        + radius_bottom * radius_top
                        + radius_top * radius_top),
            ),
            SolidNode::Translate { .. } | SolidNode::Rotate { .. } => {
                self.final_children().first()?.volume()
            }
            SolidNode::Hull { .. } => self.sphere_hull_volume(),
            SolidNode::Union { .. }
            | SolidNode::Difference { .. }
            | SolidNode::Intersection { .. } => match self.final_children().as_slice() {
                [only] => only.volume(),
                _ => None,
            },
            SolidNode::Text { .. } | SolidNode::LinearExtrude { .. } => None,
        }
    }

    /// Hull of equal spheres placed (by translation) on the corners of a box.
    fn sphere_hull_volume(&self) -> Option<f64> {
        let mut radius = None;
        let mut centres = Vec::new();
        for child in self.final_children() {
            let (offset, r) = translated_sphere(child)?;
            match radius {
                None => radius = Some(r),
                Some(existing) if existing == r => {}
                Some(_) => return None,
            }
            centres.push(offset);
        }
        let r = radius?;
        let lo = centres.iter().copied().reduce(DVec3::min)?;
        let hi = centres.iter().copied().reduce(DVec3::max)?;
        let on_corners = centres.iter().all(|c| {
            (c.x == lo.x || c.x == hi.x) && (c.y == lo.y || c.y == hi.y) && (c.z == lo.z || c.z == hi.z)
        });
        let corners_present = (0..8).all(|i| {
            let corner = DVec3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            );
            centres.contains(&corner)
        });
        (on_corners && corners_present).then(|| minkowski_box_volume(hi - lo, r))
    }
}

fn translated_sphere(solid: &Solid) -> Option<(DVec3, f64)> {
    match solid.node() {
        SolidNode::Sphere { radius } => Some((DVec3::ZERO, *radius)),
        SolidNode::Translate { offset, .. } => {
            let (inner, r) = translated_sphere(solid.final_children().first()?)?;
            Some((inner + *offset, r))
        }
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid::{hull, RenderMode};
    use approx::assert_relative_eq;

    #[test]
    fn test_minkowski_degenerates_to_sphere() {
        assert_relative_eq!(minkowski_box_volume(DVec3::ZERO, 2.0), 4.0 / 3.0 * PI * 8.0);
    }

    #[test]
    fn test_minkowski_zero_radius_is_box() {
        assert_relative_eq!(
            minkowski_box_volume(DVec3::new(2.0, 3.0, 4.0), 0.0),
            24.0
        );
    }

    #[test]
    fn test_primitive_volumes() {
        assert_relative_eq!(Solid::cube(DVec3::new(2.0, 3.0, 4.0)).unwrap().volume().unwrap(), 24.0);
        assert_relative_eq!(
            Solid::cylinder(10.0, 1.0).unwrap().volume().unwrap(),
            10.0 * PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_transform_keeps_volume() {
        let cube = Solid::cube(DVec3::splat(2.0)).unwrap();
        let moved = cube.translate(DVec3::X).rotate_z(37.0);
        assert_relative_eq!(moved.volume().unwrap(), 8.0);
    }

    #[test]
    fn test_difference_with_only_background_cuts() {
        let cube = Solid::cube(DVec3::splat(2.0)).unwrap();
        let ghost = cube.with_mode(RenderMode::Background);
        assert_relative_eq!(cube.difference(&ghost).volume().unwrap(), 8.0);
    }

    #[test]
    fn test_real_difference_has_no_closed_form() {
        let cube = Solid::cube(DVec3::splat(2.0)).unwrap();
        let cut = Solid::cube(DVec3::ONE).unwrap();
        assert_eq!(cube.difference(&cut).volume(), None);
    }

    #[test]
    fn test_hull_missing_corner_has_no_closed_form() {
        let sphere = Solid::sphere(1.0).unwrap();
        let parts = [DVec3::ZERO, DVec3::X, DVec3::Y].map(|p| sphere.translate(p * 5.0));
        assert_eq!(hull(parts).volume(), None);
    }
}
