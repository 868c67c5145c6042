//! # Solids
//!
//! The immutable CSG tree. Each [`Solid`] is a shared handle to a
//! [`SolidNode`] plus the [`RenderMode`] its parent should treat it with.

use std::sync::Arc;

use glam::DVec3;

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::text::TextStyle;

// =============================================================================
// RENDER MODE
// =============================================================================

/// How a parent composition treats a solid.
///
/// Background solids are preview-only: they are exported with the OpenSCAD
/// `%` modifier, take no part in booleans, and are ignored by bounding-box
/// and volume queries of their parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Part of the final geometry.
    #[default]
    Final,
    /// Shown as a translucent ghost only.
    Background,
}

// =============================================================================
// SOLID NODE
// =============================================================================

/// A node of the CSG tree with resolved parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SolidNode {
    // =========================================================================
    // 3D PRIMITIVES
    // =========================================================================

    /// Axis-aligned box with one corner at the origin.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([x, y, z]);
    /// ```
    Cube { size: DVec3 },

    /// Sphere centred on the origin.
    Sphere { radius: f64 },

    /// Cylinder or cone standing on the XY plane.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h=10, r1=5, r2=3);
    /// ```
    Cylinder {
        height: f64,
        radius_bottom: f64,
        radius_top: f64,
    },

    // =========================================================================
    // 2D PRIMITIVES
    // =========================================================================

    /// Glyph outline of a label, produced by a text provider.
    Text { text: String, style: TextStyle },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Extrusion of a 2D child along +Z.
    LinearExtrude { height: f64, child: Solid },

    /// Translation.
    Translate { offset: DVec3, child: Solid },

    /// Rotation about X, then Y, then Z, in degrees.
    Rotate { angles: DVec3, child: Solid },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children.
    Union { children: Vec<Solid> },

    /// First child minus the rest.
    Difference { children: Vec<Solid> },

    /// Intersection of children.
    Intersection { children: Vec<Solid> },

    /// Convex hull of children.
    Hull { children: Vec<Solid> },

    /// No geometry.
    Empty,
}

// =============================================================================
// SOLID
// =============================================================================

/// An immutable volume.
///
/// Cloning is cheap; clones share the same tree.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tray_geometry::Solid;
///
/// let a = Solid::cube(DVec3::splat(10.0)).unwrap();
/// let b = Solid::sphere(4.0).unwrap().translate(DVec3::splat(10.0));
/// let both = a.union(&b);
/// assert_eq!(both.bounding_box().unwrap().max, DVec3::splat(14.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    node: Arc<SolidNode>,
    mode: RenderMode,
}

impl Solid {
    pub(crate) fn from_node(node: SolidNode) -> Self {
        Self {
            node: Arc::new(node),
            mode: RenderMode::Final,
        }
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// A solid with no geometry.
    pub fn empty() -> Self {
        Self::from_node(SolidNode::Empty)
    }

    /// Box with one corner on the origin.
    pub fn cube(size: DVec3) -> GeometryResult<Self> {
        ensure_finite("cube", &size.to_array())?;
        if size.cmple(DVec3::ZERO).any() {
            return Err(GeometryError::degenerate(format!(
                "cube size must be positive: {size:?}"
            )));
        }
        Ok(Self::from_node(SolidNode::Cube { size }))
    }

    /// Sphere centred on the origin.
    pub fn sphere(radius: f64) -> GeometryResult<Self> {
        ensure_finite("sphere", &[radius])?;
        if radius <= 0.0 {
            return Err(GeometryError::degenerate(format!(
                "sphere radius must be positive: {radius}"
            )));
        }
        Ok(Self::from_node(SolidNode::Sphere { radius }))
    }

    /// Straight cylinder standing on the XY plane.
    pub fn cylinder(height: f64, radius: f64) -> GeometryResult<Self> {
        ensure_finite("cylinder", &[height, radius])?;
        if height <= 0.0 || radius <= 0.0 {
            return Err(GeometryError::degenerate(format!(
                "cylinder needs positive height and radius: h={height}, r={radius}"
            )));
        }
        Ok(Self::from_node(SolidNode::Cylinder {
            height,
            radius_bottom: radius,
            radius_top: radius,
        }))
    }

    /// Flat glyph outline. Only text providers build these.
    pub fn text_outline(text: impl Into<String>, style: TextStyle) -> Self {
        Self::from_node(SolidNode::Text {
            text: text.into(),
            style,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The node at the root of this solid.
    pub fn node(&self) -> &SolidNode {
        &self.node
    }

    /// How the parent treats this solid.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// True for preview-only geometry.
    pub fn is_background(&self) -> bool {
        self.mode == RenderMode::Background
    }

    /// True when the root is [`SolidNode::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(*self.node, SolidNode::Empty)
    }

    /// Same geometry with a different render mode.
    pub fn with_mode(&self, mode: RenderMode) -> Self {
        Self {
            node: Arc::clone(&self.node),
            mode,
        }
    }

    // =========================================================================
    // Transforms
    // =========================================================================

    /// Translate by `offset`.
    pub fn translate(&self, offset: DVec3) -> Self {
        Self::from_node(SolidNode::Translate {
            offset,
            child: self.clone(),
        })
    }

    /// Rotate by `angles` (degrees about X, then Y, then Z).
    pub fn rotate(&self, angles: DVec3) -> Self {
        Self::from_node(SolidNode::Rotate {
            angles,
            child: self.clone(),
        })
    }

    /// Rotate about Z only.
    pub fn rotate_z(&self, degrees: f64) -> Self {
        self.rotate(DVec3::new(0.0, 0.0, degrees))
    }

    /// Extrude a 2D outline upward by `height`.
    pub fn linear_extrude(&self, height: f64) -> GeometryResult<Self> {
        ensure_finite("linear_extrude", &[height])?;
        if height <= 0.0 {
            return Err(GeometryError::degenerate(format!(
                "extrusion height must be positive: {height}"
            )));
        }
        Ok(Self::from_node(SolidNode::LinearExtrude {
            height,
            child: self.clone(),
        }))
    }

    // =========================================================================
    // CSG operations
    // =========================================================================

    /// Boolean union (self + other).
    pub fn union(&self, other: &Solid) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self::from_node(SolidNode::Union {
            children: self.extended_children(other, |n| match n {
                SolidNode::Union { children } => Some(children),
                _ => None,
            }),
        })
    }

    /// Boolean difference (self - other).
    pub fn difference(&self, other: &Solid) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        Self::from_node(SolidNode::Difference {
            children: self.extended_children(other, |n| match n {
                SolidNode::Difference { children } => Some(children),
                _ => None,
            }),
        })
    }

    /// Boolean intersection.
    pub fn intersection(&self, other: &Solid) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        if other.is_empty() {
            return other.clone();
        }
        Self::from_node(SolidNode::Intersection {
            children: self.extended_children(other, |n| match n {
                SolidNode::Intersection { children } => Some(children),
                _ => None,
            }),
        })
    }

    /// Union of every solid in `parts`.
    pub fn union_all(parts: impl IntoIterator<Item = Solid>) -> Self {
        parts
            .into_iter()
            .fold(Self::empty(), |acc, part| acc.union(&part))
    }

    /// Appends `other` to this node's children when this node already is the
    /// same operation, otherwise starts a new two-child list.
    fn extended_children(
        &self,
        other: &Solid,
        same_op: impl Fn(&SolidNode) -> Option<&Vec<Solid>>,
    ) -> Vec<Solid> {
        match same_op(&self.node) {
            Some(children) if !self.is_background() => {
                let mut children = children.clone();
                children.push(other.clone());
                children
            }
            _ => vec![self.clone(), other.clone()],
        }
    }

    /// Copy of this tree with every background subtree removed.
    pub fn strip_background(&self) -> Self {
        if self.is_background() {
            return Self::empty();
        }
        let strip_all = |children: &[Solid]| -> Vec<Solid> {
            children
                .iter()
                .filter(|c| !c.is_background())
                .map(Solid::strip_background)
                .collect()
        };
        let node = match &*self.node {
            SolidNode::LinearExtrude { height, child } => SolidNode::LinearExtrude {
                height: *height,
                child: child.strip_background(),
            },
            SolidNode::Translate { offset, child } => SolidNode::Translate {
                offset: *offset,
                child: child.strip_background(),
            },
            SolidNode::Rotate { angles, child } => SolidNode::Rotate {
                angles: *angles,
                child: child.strip_background(),
            },
            SolidNode::Union { children } => SolidNode::Union {
                children: strip_all(children),
            },
            SolidNode::Difference { children } => SolidNode::Difference {
                children: strip_all(children),
            },
            SolidNode::Intersection { children } => SolidNode::Intersection {
                children: strip_all(children),
            },
            SolidNode::Hull { children } => SolidNode::Hull {
                children: strip_all(children),
            },
            leaf => leaf.clone(),
        };
        Self::from_node(node)
    }

    /// Children of this node that take part in its geometry.
    pub(crate) fn final_children(&self) -> Vec<&Solid> {
        match &*self.node {
            SolidNode::Union { children }
            | SolidNode::Difference { children }
            | SolidNode::Intersection { children }
            | SolidNode::Hull { children } => {
                children.iter().filter(|c| !c.is_background()).collect()
            }
            SolidNode::LinearExtrude { child, .. }
            | SolidNode::Translate { child, .. }
            | SolidNode::Rotate { child, .. } => {
                if child.is_background() {
                    Vec::new()
                } else {
                    vec![child]
                }
            }
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Boolean union of two solids.
pub fn union(a: &Solid, b: &Solid) -> Solid {
    a.union(b)
}

/// Boolean difference `a - b`.
pub fn difference(a: &Solid, b: &Solid) -> Solid {
    a.difference(b)
}

/// Boolean intersection of two solids.
pub fn intersection(a: &Solid, b: &Solid) -> Solid {
    a.intersection(b)
}

/// Convex hull of `parts`. A hull of nothing is empty.
pub fn hull(parts: impl IntoIterator<Item = Solid>) -> Solid {
    let children: Vec<Solid> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    if children.is_empty() {
        return Solid::empty();
    }
    Solid::from_node(SolidNode::Hull { children })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Solid {
        Solid::cube(DVec3::ONE).unwrap()
    }

    #[test]
    fn test_cube_rejects_zero_size() {
        assert!(matches!(
            Solid::cube(DVec3::new(0.0, 1.0, 1.0)),
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_cube_rejects_nan() {
        assert!(matches!(
            Solid::cube(DVec3::new(f64::NAN, 1.0, 1.0)),
            Err(GeometryError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_sphere_and_cylinder_reject_non_positive() {
        assert!(Solid::sphere(0.0).is_err());
        assert!(Solid::cylinder(10.0, -1.0).is_err());
        assert!(Solid::cylinder(0.0, 1.0).is_err());
    }

    #[test]
    fn test_difference_flattens() {
        let a = unit_cube();
        let b = unit_cube().translate(DVec3::X);
        let c = unit_cube().translate(DVec3::Y);
        let result = a.difference(&b).difference(&c);
        match result.node() {
            SolidNode::Difference { children } => assert_eq!(children.len(), 3),
            other => panic!("Expected Difference, got {other:?}"),
        }
    }

    #[test]
    fn test_union_after_difference_nests() {
        let a = unit_cube();
        let b = unit_cube().translate(DVec3::X);
        let result = a.difference(&b).union(&unit_cube());
        match result.node() {
            SolidNode::Union { children } => {
                assert_eq!(children.len(), 2);
                assert!(matches!(children[0].node(), SolidNode::Difference { .. }));
            }
            other => panic!("Expected Union, got {other:?}"),
        }
    }

    #[test]
    fn test_operands_are_not_modified() {
        let a = unit_cube();
        let b = unit_cube().translate(DVec3::X);
        let before = a.clone();
        let _ = a.difference(&b);
        assert_eq!(a, before);
    }

    #[test]
    fn test_empty_identities() {
        let a = unit_cube();
        assert_eq!(Solid::empty().union(&a), a);
        assert_eq!(a.union(&Solid::empty()), a);
        assert_eq!(a.difference(&Solid::empty()), a);
        assert!(Solid::empty().difference(&a).is_empty());
        assert!(a.intersection(&Solid::empty()).is_empty());
    }

    #[test]
    fn test_union_all() {
        let parts = (0..4).map(|i| unit_cube().translate(DVec3::X * i as f64));
        match Solid::union_all(parts).node() {
            SolidNode::Union { children } => assert_eq!(children.len(), 4),
            other => panic!("Expected Union, got {other:?}"),
        }
    }

    #[test]
    fn test_background_not_flattened_into() {
        let ghost = unit_cube()
            .difference(&unit_cube().translate(DVec3::X))
            .with_mode(RenderMode::Background);
        let result = ghost.difference(&unit_cube());
        match result.node() {
            SolidNode::Difference { children } => {
                assert_eq!(children.len(), 2);
                assert!(children[0].is_background());
            }
            other => panic!("Expected Difference, got {other:?}"),
        }
    }

    #[test]
    fn test_strip_background() {
        let ghost = unit_cube().translate(DVec3::X).with_mode(RenderMode::Background);
        let result = unit_cube().difference(&ghost).strip_background();
        match result.node() {
            SolidNode::Difference { children } => {
                assert_eq!(children.len(), 1);
                assert!(!children[0].is_background());
            }
            other => panic!("Expected Difference, got {other:?}"),
        }
    }

    #[test]
    fn test_hull_of_nothing_is_empty() {
        assert!(hull(Vec::new()).is_empty());
        assert!(hull(vec![Solid::empty()]).is_empty());
    }

    #[test]
    fn test_linear_extrude_rejects_zero() {
        assert!(unit_cube().linear_extrude(0.0).is_err());
    }

    #[test]
    fn test_solid_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Solid>();
    }
}
