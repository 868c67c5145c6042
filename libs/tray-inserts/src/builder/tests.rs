//! # Builder Tests

use approx::assert_relative_eq;
use glam::DVec3;
use tray_geometry::SolidNode;

use super::*;

fn profile(pairs: &[[f64; 2]]) -> Profile {
    Profile::from_pairs(pairs).unwrap()
}

// =============================================================================
// SOLID MODE
// =============================================================================

#[test]
fn test_single_segment_is_one_rounded_box() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0]]);
    let solid = StepProfileBuilder::new(&p, 10.0, 2.0).build().unwrap();
    match solid.node() {
        SolidNode::Translate { child, .. } => {
            assert!(matches!(child.node(), SolidNode::Hull { .. }))
        }
        other => panic!("Expected translated hull, got {other:?}"),
    }
    let volume = solid.volume().unwrap();
    assert!(volume > 45.0 * 24.0 * 10.0 * 0.9);
    assert!(volume < 45.0 * 24.0 * 10.0);
}

#[test]
fn test_segments_abut_along_extent() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0], [52.0, 44.0], [54.0, 64.0]]);
    let segments = StepProfileBuilder::new(&p, 10.0, 2.0).segments().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].origin, DVec3::new(-45.0, 0.0, 0.0));
    assert_eq!(segments[1].origin, DVec3::new(-52.0, 24.0, 0.0));
    assert_eq!(segments[2].origin, DVec3::new(-54.0, 44.0, 0.0));
    // interior segments overlap the next by 2r, the last closes flush
    assert_eq!(segments[0].size.y, 28.0);
    assert_eq!(segments[1].size.y, 24.0);
    assert_eq!(segments[2].size.y, 20.0);
}

#[test]
fn test_staircase_bounds() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0], [52.0, 44.0]]);
    let solid = StepProfileBuilder::new(&p, 10.0, 2.0).build().unwrap();
    let bounds = solid.bounding_box().unwrap();
    assert_eq!(bounds.min, DVec3::new(-52.0, 0.0, 0.0));
    assert_eq!(bounds.max, DVec3::new(0.0, 44.0, 10.0));
}

#[test]
fn test_footprint_areas_sum_to_profile_area() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0], [52.0, 44.0], [54.0, 64.0], [58.0, 120.0]]);
    let segments = StepProfileBuilder::new(&p, 10.0, 2.0).segments().unwrap();
    let total: f64 = segments.iter().map(|s| s.footprint_area).sum();
    assert_relative_eq!(total, p.area());
}

#[test]
fn test_label_does_not_change_geometry() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0], [52.0, 44.0]]);
    let plain = StepProfileBuilder::new(&p, 10.0, 2.0).build().unwrap();
    let labelled = StepProfileBuilder::new(&p, 10.0, 2.0)
        .with_label("Trees")
        .build()
        .unwrap();
    assert_eq!(plain, labelled);
}

// =============================================================================
// HOLLOW MODE
// =============================================================================

#[test]
fn test_hollow_interior_is_inset_by_wall() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0], [52.0, 44.0]]);
    let outer = StepProfileBuilder::new(&p, 10.0, 2.0)
        .build()
        .unwrap()
        .bounding_box()
        .unwrap();
    let inner = StepProfileBuilder::new(&p, 100.0, 2.0)
        .hollow(2.0, 1.0)
        .build()
        .unwrap()
        .bounding_box()
        .unwrap();
    assert_eq!(outer.size().x - inner.size().x, 4.0);
    assert_eq!(outer.size().y - inner.size().y, 4.0);
    assert_eq!(inner.min.x - outer.min.x, 2.0);
    assert_eq!(inner.min.y - outer.min.y, 2.0);
    assert_eq!(inner.min.z, 1.0);
}

#[test]
fn test_hollow_overlap_uses_box_radius_and_trim_uses_wall() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0], [52.0, 44.0]]);
    let segments = StepProfileBuilder::new(&p, 100.0, 6.0)
        .hollow(2.0, 1.0)
        .segments()
        .unwrap();
    assert_eq!(segments[0].origin, DVec3::new(-43.0, 2.0, 1.0));
    assert_eq!(segments[0].size, DVec3::new(41.0, 36.0, 100.0));
    assert_eq!(segments[1].origin, DVec3::new(-50.0, 26.0, 1.0));
    assert_eq!(segments[1].size, DVec3::new(48.0, 16.0, 100.0));
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_zero_length_segment_is_degenerate() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0], [52.0, 24.0]]);
    let err = StepProfileBuilder::new(&p, 10.0, 2.0).build().unwrap_err();
    match err {
        InsertError::DegenerateGeometry { context, .. } => assert_eq!(context, "segment 1"),
        other => panic!("Expected DegenerateGeometry, got {other:?}"),
    }
}

#[test]
fn test_radius_too_large_names_segment() {
    let p = profile(&[[0.0, 0.0], [45.0, 24.0], [52.0, 36.0]]);
    let err = StepProfileBuilder::new(&p, 100.0, 6.0)
        .hollow(2.0, 1.0)
        .with_label("pocket")
        .build()
        .unwrap_err();
    match err {
        InsertError::DegenerateGeometry { context, .. } => {
            assert_eq!(context, "pocket segment 1")
        }
        other => panic!("Expected DegenerateGeometry, got {other:?}"),
    }
}
