//! # Catalog Constants
//!
//! Fixed dimensions of the container, the physical pieces stored in it and
//! the rendering defaults. All lengths are millimetres.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Export tessellation defaults ($fn)
//! - **Container**: Floor, rounding, heights and the outer step profile
//! - **Pieces**: Footprints of the items each tray holds
//! - **Labels**: Engraved text styling

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when checking cavity placements against a tray envelope, so that a
/// cavity flush with a wall is not reported as breaching it.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS (OpenSCAD $fn)
// =============================================================================

/// Default `$fn` written at the top of every exported file.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let header = format!("$fn = {};", DEFAULT_SEGMENTS);
/// assert_eq!(header, "$fn = 90;");
/// ```
pub const DEFAULT_SEGMENTS: u32 = 90;

/// Smallest `$fn` that still describes a closed polygon.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// CONTAINER CONSTANTS
// =============================================================================

/// Thickness of every tray floor.
pub const FLOOR_THICKNESS: f64 = 1.0;

/// Rounding radius applied to the vertical edges of every tray block.
pub const CORNER_RADIUS: f64 = 2.0;

/// Depth of engraved label recesses.
pub const TEXT_DEPTH: f64 = 0.4;

/// Inner height of the game box.
pub const CONTAINER_HEIGHT: f64 = 64.0;

/// Height of the tallest item sitting beside the trays.
pub const TALLEST_HEIGHT: f64 = 34.0;

/// Thickness of the river-of-fire divider that runs along the profile's
/// origin edge. Trays sitting beside it are inset by this amount.
pub const DIVIDER_CLEARANCE: f64 = 8.0;

/// Clearance used by trays stacked above the divider, where only its
/// raised rim intrudes.
///
/// Kept as its own value rather than derived from [`DIVIDER_CLEARANCE`].
pub const RAISED_DIVIDER_CLEARANCE: f64 = 3.0;

/// Height used for through cuts, well above any tray top.
pub const CUT_HEIGHT: f64 = 100.0;

/// Staircase boundary of the container end, as `[offset, extent]` pairs.
///
/// # Example
///
/// ```rust
/// use config::constants::END_STEPS;
///
/// assert!(END_STEPS.windows(2).all(|w| w[0][1] <= w[1][1]));
/// ```
pub const END_STEPS: [[f64; 2]; 7] = [
    [0.0, 0.0],
    [45.0, 24.0],
    [52.0, 44.0],
    [54.0, 64.0],
    [58.0, 120.0],
    [62.0, 145.0],
    [66.0, 197.0],
];

// =============================================================================
// PIECE CONSTANTS
// =============================================================================

/// Spore card stack: long side, short side, height.
pub const SPORE_WIDTH: f64 = 66.0;
/// Spore card stack depth.
pub const SPORE_DEPTH: f64 = 17.0;
/// Spore card stack height.
pub const SPORE_HEIGHT: f64 = 24.0;

/// Siege tree pieces.
pub const SIEGE_TREES_WIDTH: f64 = 39.0;
/// Siege tree depth.
pub const SIEGE_TREES_DEPTH: f64 = 16.0;
/// Siege tree height.
pub const SIEGE_TREES_HEIGHT: f64 = 33.0;

/// Dungeon building.
pub const DUNGEON_WIDTH: f64 = 32.0;
/// Dungeon depth.
pub const DUNGEON_DEPTH: f64 = 18.0;
/// Dungeon height.
pub const DUNGEON_HEIGHT: f64 = 41.0;

/// Virtue card width (long side, standing on edge).
pub const VIRTUE_WIDTH: f64 = 71.0;
/// Virtue card height.
pub const VIRTUE_HEIGHT: f64 = 32.0;
/// Thickness of the four-card virtue stack.
pub const VIRTUE_WIDE_DEPTH: f64 = 9.0;
/// Thickness of a three-card virtue stack.
pub const VIRTUE_NARROW_DEPTH: f64 = 7.0;
/// One wide stack followed by four narrow ones.
pub const VIRTUE_STACKS: [f64; 5] = [
    VIRTUE_WIDE_DEPTH,
    VIRTUE_NARROW_DEPTH,
    VIRTUE_NARROW_DEPTH,
    VIRTUE_NARROW_DEPTH,
    VIRTUE_NARROW_DEPTH,
];

/// Building base height.
pub const BASE_HEIGHT: f64 = 20.0;
/// Building base diameter.
pub const BASE_DIAMETER: f64 = 28.5;

// =============================================================================
// TOKEN TRAY CONSTANTS
// =============================================================================

/// Rounding radius of the token pockets.
pub const TOKEN_CORNER_RADIUS: f64 = 6.0;

/// How far the divider lip reaches past the tray edge.
pub const TOKEN_LIP_EXTRA_WIDTH: f64 = 2.0;

/// Distance of each divider lip from the tray's short ends.
pub const TOKEN_LIP_INSET: f64 = 5.0;

/// Extent removed from the far end of the second spirit pocket.
///
/// One millimetre short of the blueprint's 40 so that the pocket's closing
/// segment stays wider than its rounding diameter.
pub const SPIRIT_POCKET_TRIM: f64 = 39.0;

/// Extent removed from the far end of the first warrior pocket.
pub const WARRIOR_POCKET_TRIM: f64 = 6.5;

// =============================================================================
// LABEL CONSTANTS
// =============================================================================

/// Font handed to the text provider.
pub const LABEL_FONT: &str = "Gloucester MT Extra Condensed:style=Regular";

/// Regular label size.
pub const LABEL_SIZE: f64 = 5.0;

/// Label size for narrow pockets.
pub const SMALL_LABEL_SIZE: f64 = 4.0;

/// Average glyph advance as a fraction of the label size, used to estimate
/// label extents.
pub const TEXT_ADVANCE_RATIO: f64 = 0.6;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
