//! # Rounded Box Tests

use glam::DVec3;

use super::*;
use crate::error::GeometryError;
use crate::solid::SolidNode;

#[test]
fn test_bounding_box_matches_dimensions() {
    let solid = rounded_box(45.0, 24.0, 10.0, 2.0).unwrap();
    let bounds = solid.bounding_box().unwrap();
    assert_eq!(bounds.min, DVec3::ZERO);
    assert_eq!(bounds.max, DVec3::new(45.0, 24.0, 10.0));
}

#[test]
fn test_hull_of_eight_spheres() {
    let solid = rounded_box(45.0, 24.0, 10.0, 2.0).unwrap();
    match solid.node() {
        SolidNode::Hull { children } => assert_eq!(children.len(), 8),
        other => panic!("Expected Hull, got {other:?}"),
    }
}

#[test]
fn test_volume_between_core_and_box() {
    let spec = RoundedBox::new(45.0, 24.0, 10.0, 2.0).unwrap();
    let volume = spec.volume();
    assert!(volume < 45.0 * 24.0 * 10.0);
    assert!(volume > 45.0 * 24.0 * 10.0 * 0.9);
    assert!(volume > 41.0 * 20.0 * 10.0);
}

#[test]
fn test_solid_volume_matches_closed_form() {
    let spec = RoundedBox::new(30.0, 20.0, 12.0, 3.0).unwrap();
    let from_tree = spec.to_solid().unwrap().volume().unwrap();
    approx::assert_relative_eq!(from_tree, spec.volume(), epsilon = 1e-9);
}

#[test]
fn test_zero_radius_is_cube() {
    let solid = rounded_box(4.0, 5.0, 6.0, 0.0).unwrap();
    assert!(matches!(solid.node(), SolidNode::Cube { .. }));
    assert_eq!(RoundedBox::new(4.0, 5.0, 6.0, 0.0).unwrap().volume(), 120.0);
}

#[test]
fn test_radius_too_large_for_depth() {
    let err = rounded_box(45.0, 12.0, 30.0, 6.0).unwrap_err();
    match err {
        GeometryError::DegenerateGeometry { message } => assert!(message.contains("depth")),
        other => panic!("Expected DegenerateGeometry, got {other:?}"),
    }
}

#[test]
fn test_radius_too_large_for_height() {
    assert!(matches!(
        rounded_box(45.0, 24.0, 4.0, 2.0),
        Err(GeometryError::DegenerateGeometry { .. })
    ));
}

#[test]
fn test_negative_radius_rejected() {
    assert!(rounded_box(10.0, 10.0, 10.0, -1.0).is_err());
}

#[test]
fn test_non_finite_rejected() {
    assert!(matches!(
        rounded_box(f64::INFINITY, 10.0, 10.0, 1.0),
        Err(GeometryError::InvalidArgument { .. })
    ));
}
