//! # Tests for Catalog Constants
//!
//! Sanity checks that the named constants describe a buildable container.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON > 0.0);
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_approx_equal() {
    assert!(approx_equal(0.1 + 0.2, 0.3));
    assert!(!approx_equal(1.0, 1.001));
}

// =============================================================================
// CONTAINER TESTS
// =============================================================================

#[test]
fn test_clearance_values() {
    assert_eq!(DIVIDER_CLEARANCE, 8.0);
    assert_eq!(RAISED_DIVIDER_CLEARANCE, 3.0);
}

#[test]
fn test_end_steps_are_monotonic() {
    for pair in END_STEPS.windows(2) {
        assert!(
            pair[1][1] > pair[0][1],
            "extent must grow: {:?} -> {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_end_steps_start_at_origin() {
    assert_eq!(END_STEPS[0], [0.0, 0.0]);
}

#[test]
fn test_cut_height_clears_container() {
    assert!(CUT_HEIGHT > CONTAINER_HEIGHT);
}

// =============================================================================
// PIECE TESTS
// =============================================================================

#[test]
fn test_virtue_stacks_order() {
    assert_eq!(VIRTUE_STACKS[0], VIRTUE_WIDE_DEPTH);
    assert!(VIRTUE_STACKS[1..].iter().all(|d| *d == VIRTUE_NARROW_DEPTH));
}

#[test]
fn test_token_pockets_wider_than_rounding() {
    assert!(2.0 * TOKEN_CORNER_RADIUS < END_STEPS[1][0]);
}

#[test]
fn test_default_segments_is_valid() {
    assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
}
