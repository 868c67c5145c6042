//! # Bounding Boxes
//!
//! Axis-aligned bounds of a [`Solid`], computed from the CSG tree without
//! tessellating it.
//!
//! Bounds are exact for primitives, translations and quarter-turn
//! rotations. Differences report the bounds of their first operand and
//! intersections the overlap of their operands' bounds, so both may be
//! larger than the carved result. Text bounds are an estimate derived from
//! the glyph count.

use config::constants::TEXT_ADVANCE_RATIO;
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::solid::{Solid, SolidNode};
use crate::text::{HAlign, VAlign};

/// Axis-aligned bounding box.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tray_geometry::Aabb;
///
/// let a = Aabb::new(DVec3::ZERO, DVec3::new(2.0, 4.0, 6.0));
/// assert_eq!(a.center(), DVec3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Box spanning two opposite corners, in any order.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Edge lengths.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Centre point.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlap of both boxes, if any.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.cmpgt(max).any() {
            None
        } else {
            Some(Aabb { min, max })
        }
    }

    /// Box moved by `offset`.
    pub fn translate(&self, offset: DVec3) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Bounds of this box after an OpenSCAD-style rotation (degrees).
    pub fn rotate(&self, angles: DVec3) -> Aabb {
        let matrix = rotation_matrix(angles);
        let corners = self.corners().map(|c| matrix * c);
        let (min, max) = corners
            .iter()
            .skip(1)
            .fold((corners[0], corners[0]), |(lo, hi), c| (lo.min(*c), hi.max(*c)));
        Aabb { min, max }
    }

    /// The eight corners.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// True when `other`'s XY footprint lies inside this box's footprint,
    /// allowing `tolerance` of slack on every side.
    pub fn contains_footprint(&self, other: &Aabb, tolerance: f64) -> bool {
        other.min.x >= self.min.x - tolerance
            && other.min.y >= self.min.y - tolerance
            && other.max.x <= self.max.x + tolerance
            && other.max.y <= self.max.y + tolerance
    }

    /// True when the two boxes share interior volume.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.max).all() && other.min.cmplt(self.max).all()
    }
}

// =============================================================================
// ROTATION
// =============================================================================

/// Sine and cosine of an angle in degrees, exact on quarter turns.
pub fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    let turns = degrees / 90.0;
    if turns == turns.round() {
        match (turns as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        degrees.to_radians().sin_cos()
    }
}

/// Rotation about X, then Y, then Z, as OpenSCAD's `rotate([x, y, z])`.
pub fn rotation_matrix(angles: DVec3) -> DMat3 {
    let (sx, cx) = sin_cos_deg(angles.x);
    let (sy, cy) = sin_cos_deg(angles.y);
    let (sz, cz) = sin_cos_deg(angles.z);
    let rx = DMat3::from_cols(DVec3::X, DVec3::new(0.0, cx, sx), DVec3::new(0.0, -sx, cx));
    let ry = DMat3::from_cols(DVec3::new(cy, 0.0, -sy), DVec3::Y, DVec3::new(sy, 0.0, cy));
    let rz = DMat3::from_cols(DVec3::new(cz, sz, 0.0), DVec3::new(-sz, cz, 0.0), DVec3::Z);
    rz * ry * rx
}

// =============================================================================
// SOLID BOUNDS
// =============================================================================

impl Solid {
    /// Bounding box of the final geometry, or `None` when there is none.
    pub fn bounding_box(&self) -> Option<Aabb> {
        match self.node() {
            SolidNode::Cube { size } => Some(Aabb::new(DVec3::ZERO, *size)),
            SolidNode::Sphere { radius } => {
                Some(Aabb::new(DVec3::splat(-radius), DVec3::splat(*radius)))
            }
            SolidNode::Cylinder {
                height,
                radius_bottom,
                radius_top,
            } => {
                let r = radius_bottom.max(*radius_top);
                Some(Aabb::new(
                    DVec3::new(-r, -r, 0.0),
                    DVec3::new(r, r, *height),
                ))
            }
            SolidNode::Text { text, style } => {
                let width = text.chars().count() as f64 * style.size * TEXT_ADVANCE_RATIO;
                let height = style.size;
                let x0 = match style.halign {
                    HAlign::Left => 0.0,
                    HAlign::Center => -width / 2.0,
                    HAlign::Right => -width,
                };
                let y0 = match style.valign {
                    VAlign::Top => -height,
                    VAlign::Center => -height / 2.0,
                    VAlign::Baseline | VAlign::Bottom => 0.0,
                };
                Some(Aabb::new(
                    DVec3::new(x0, y0, 0.0),
                    DVec3::new(x0 + width, y0 + height, 0.0),
                ))
            }
            SolidNode::LinearExtrude { height, .. } => {
                let outline = self.first_final_bounds()?;
                Some(Aabb::new(
                    DVec3::new(outline.min.x, outline.min.y, 0.0),
                    DVec3::new(outline.max.x, outline.max.y, *height),
                ))
            }
            SolidNode::Translate { offset, .. } => {
                Some(self.first_final_bounds()?.translate(*offset))
            }
            SolidNode::Rotate { angles, .. } => Some(self.first_final_bounds()?.rotate(*angles)),
            SolidNode::Union { .. } | SolidNode::Hull { .. } => self
                .final_children()
                .into_iter()
                .filter_map(Solid::bounding_box)
                .reduce(|a, b| a.union(&b)),
            SolidNode::Difference { .. } => self.first_final_bounds(),
            SolidNode::Intersection { .. } => {
                let mut boxes = self.final_children().into_iter().map(Solid::bounding_box);
                let first = boxes.next()??;
                boxes.try_fold(first, |acc, b| acc.intersection(&b?))
            }
            SolidNode::Empty => None,
        }
    }

    fn first_final_bounds(&self) -> Option<Aabb> {
        self.final_children().first()?.bounding_box()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid::RenderMode;
    use crate::text::TextStyle;
    use approx::assert_relative_eq;

    #[test]
    fn test_quarter_turns_are_exact() {
        assert_eq!(sin_cos_deg(90.0), (1.0, 0.0));
        assert_eq!(sin_cos_deg(-90.0), (-1.0, 0.0));
        assert_eq!(sin_cos_deg(180.0), (0.0, -1.0));
        assert_eq!(sin_cos_deg(360.0), (0.0, 1.0));
    }

    #[test]
    fn test_sin_cos_general_angle() {
        let (s, c) = sin_cos_deg(30.0);
        assert_relative_eq!(s, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c, 3f64.sqrt() / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        let b = Aabb::new(DVec3::ZERO, DVec3::new(10.0, 2.0, 1.0));
        let r = b.rotate(DVec3::new(0.0, 0.0, 90.0));
        assert_eq!(r.min, DVec3::new(-2.0, 0.0, 0.0));
        assert_eq!(r.max, DVec3::new(0.0, 10.0, 1.0));
    }

    #[test]
    fn test_rotate_y_negative_quarter_turn() {
        // A cylinder laid along -X, as used for the divider lip.
        let cyl = Solid::cylinder(2.0, 2.0).unwrap();
        let laid = cyl.rotate(DVec3::new(0.0, -90.0, 0.0));
        let b = laid.bounding_box().unwrap();
        assert_eq!(b.min, DVec3::new(-2.0, -2.0, -2.0));
        assert_eq!(b.max, DVec3::new(0.0, 2.0, 2.0));
    }

    #[test]
    fn test_difference_uses_first_operand() {
        let block = Solid::cube(DVec3::splat(10.0)).unwrap();
        let cut = Solid::cube(DVec3::splat(30.0)).unwrap().translate(DVec3::splat(5.0));
        let b = block.difference(&cut).bounding_box().unwrap();
        assert_eq!(b, Aabb::new(DVec3::ZERO, DVec3::splat(10.0)));
    }

    #[test]
    fn test_intersection_overlap() {
        let a = Solid::cube(DVec3::splat(10.0)).unwrap();
        let b = a.translate(DVec3::new(5.0, 0.0, 0.0));
        let i = a.intersection(&b).bounding_box().unwrap();
        assert_eq!(i.min, DVec3::new(5.0, 0.0, 0.0));
        assert_eq!(i.max, DVec3::splat(10.0));
    }

    #[test]
    fn test_disjoint_intersection_has_no_bounds() {
        let a = Solid::cube(DVec3::ONE).unwrap();
        let b = a.translate(DVec3::splat(5.0));
        assert_eq!(a.intersection(&b).bounding_box(), None);
    }

    #[test]
    fn test_background_children_ignored() {
        let a = Solid::cube(DVec3::ONE).unwrap();
        let ghost = a.translate(DVec3::splat(50.0)).with_mode(RenderMode::Background);
        assert_eq!(a.union(&ghost).bounding_box(), a.bounding_box());
    }

    #[test]
    fn test_text_bounds_follow_alignment() {
        let style = TextStyle::new(5.0, "Sans").with_halign(HAlign::Left);
        let text = Solid::text_outline("ABCD", style);
        let b = text.bounding_box().unwrap();
        assert_relative_eq!(b.min.x, 0.0);
        assert_relative_eq!(b.max.x, 4.0 * 5.0 * TEXT_ADVANCE_RATIO);
        assert_relative_eq!(b.min.y, -2.5);
        assert_relative_eq!(b.max.y, 2.5);
    }

    #[test]
    fn test_extrusion_bounds() {
        let text = Solid::text_outline("AB", TextStyle::new(5.0, "Sans"));
        let slab = text.linear_extrude(1.4).unwrap();
        let b = slab.bounding_box().unwrap();
        assert_eq!(b.min.z, 0.0);
        assert_eq!(b.max.z, 1.4);
    }

    #[test]
    fn test_contains_footprint_ignores_height() {
        let envelope = Aabb::new(DVec3::ZERO, DVec3::new(10.0, 10.0, 5.0));
        let tall = Aabb::new(DVec3::new(1.0, 1.0, 1.0), DVec3::new(9.0, 9.0, 100.0));
        assert!(envelope.contains_footprint(&tall, 1e-9));
        let wide = Aabb::new(DVec3::new(-1.0, 1.0, 1.0), DVec3::new(9.0, 9.0, 2.0));
        assert!(!envelope.contains_footprint(&wide, 1e-9));
    }

    #[test]
    fn test_overlaps() {
        let a = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert!(a.overlaps(&Aabb::new(DVec3::splat(0.5), DVec3::splat(2.0))));
        assert!(!a.overlaps(&Aabb::new(DVec3::new(1.0, 0.0, 0.0), DVec3::splat(2.0))));
    }
}
