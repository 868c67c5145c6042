//! The catalog record handed to every tray builder.
//!
//! Each field documents the effect it has on the generated geometry so that
//! a catalog defect reported by a builder can be traced back to one value.

use serde::Serialize;
use thiserror::Error;

use crate::constants::*;

/// Footprint of one physical piece class.
///
/// # Examples
/// ```
/// use config::catalog::Piece;
/// let dungeon = Piece::new(32.0, 18.0, 41.0);
/// assert_eq!(dungeon.width, 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Piece {
    /// Long side, along the profile extent axis unless stated otherwise.
    pub width: f64,
    /// Short side.
    pub depth: f64,
    /// Standing height.
    pub height: f64,
}

impl Piece {
    /// Creates a piece footprint.
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    fn is_positive(&self) -> bool {
        self.width > 0.0 && self.depth > 0.0 && self.height > 0.0
    }
}

/// Every dimension used by the tray builders.
///
/// # Examples
/// ```
/// use config::catalog::TrayCatalog;
/// let catalog = TrayCatalog::default();
/// assert_eq!(catalog.tokens_height(), 29.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrayCatalog {
    /// Floor thickness under every cavity; cavities start at this height.
    pub floor: f64,
    /// Rounding applied to all primitive edges; also the hollow-shell wall.
    pub corner_radius: f64,
    /// Depth of engraved label recesses.
    pub text_depth: f64,
    /// Inner height of the game box.
    pub container_height: f64,
    /// Tallest item sharing the box; the tokens tray fills what is left.
    pub tallest_height: f64,
    /// Profile inset beside the full-height divider feature.
    pub divider_clearance: f64,
    /// Profile inset for trays stacked above the divider.
    pub raised_divider_clearance: f64,
    /// Height of through cuts.
    pub cut_height: f64,
    /// Outer staircase of the container end as `[offset, extent]` pairs.
    pub end_steps: Vec<[f64; 2]>,
    /// Spore card stack.
    pub spore: Piece,
    /// Siege tree pieces.
    pub siege_trees: Piece,
    /// Dungeon building.
    pub dungeon: Piece,
    /// Virtue card width (long side).
    pub virtue_width: f64,
    /// Virtue card height.
    pub virtue_height: f64,
    /// Thickness of each virtue stack, placed in order.
    pub virtue_stacks: Vec<f64>,
    /// Building base diameter.
    pub base_diameter: f64,
    /// Building base height.
    pub base_height: f64,
    /// Rounding of the token pockets.
    pub token_corner_radius: f64,
    /// Reach of the divider lip past the tokens tray edge.
    pub token_lip_extra_width: f64,
    /// Distance of the divider lips from the tray ends.
    pub token_lip_inset: f64,
    /// Extent removed from the far end of the second spirit pocket.
    pub spirit_pocket_trim: f64,
    /// Extent removed from the far end of the first warrior pocket.
    pub warrior_pocket_trim: f64,
    /// Font for engraved labels.
    pub label_font: String,
    /// Regular label size.
    pub label_size: f64,
    /// Label size for narrow pockets.
    pub small_label_size: f64,
    /// `$fn` written into exported files.
    pub segments: u32,
}

impl Default for TrayCatalog {
    fn default() -> Self {
        Self {
            floor: FLOOR_THICKNESS,
            corner_radius: CORNER_RADIUS,
            text_depth: TEXT_DEPTH,
            container_height: CONTAINER_HEIGHT,
            tallest_height: TALLEST_HEIGHT,
            divider_clearance: DIVIDER_CLEARANCE,
            raised_divider_clearance: RAISED_DIVIDER_CLEARANCE,
            cut_height: CUT_HEIGHT,
            end_steps: END_STEPS.to_vec(),
            spore: Piece::new(SPORE_WIDTH, SPORE_DEPTH, SPORE_HEIGHT),
            siege_trees: Piece::new(SIEGE_TREES_WIDTH, SIEGE_TREES_DEPTH, SIEGE_TREES_HEIGHT),
            dungeon: Piece::new(DUNGEON_WIDTH, DUNGEON_DEPTH, DUNGEON_HEIGHT),
            virtue_width: VIRTUE_WIDTH,
            virtue_height: VIRTUE_HEIGHT,
            virtue_stacks: VIRTUE_STACKS.to_vec(),
            base_diameter: BASE_DIAMETER,
            base_height: BASE_HEIGHT,
            token_corner_radius: TOKEN_CORNER_RADIUS,
            token_lip_extra_width: TOKEN_LIP_EXTRA_WIDTH,
            token_lip_inset: TOKEN_LIP_INSET,
            spirit_pocket_trim: SPIRIT_POCKET_TRIM,
            warrior_pocket_trim: WARRIOR_POCKET_TRIM,
            label_font: LABEL_FONT.to_string(),
            label_size: LABEL_SIZE,
            small_label_size: SMALL_LABEL_SIZE,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl TrayCatalog {
    /// Height of the tokens tray: whatever the tallest item leaves free.
    pub fn tokens_height(&self) -> f64 {
        self.container_height - self.tallest_height - self.floor
    }

    /// Checks the catalog for values no builder could turn into geometry.
    ///
    /// # Examples
    /// ```
    /// use config::catalog::{ConfigError, TrayCatalog};
    /// let catalog = TrayCatalog { floor: 0.0, ..TrayCatalog::default() };
    /// assert_eq!(
    ///     catalog.validate(),
    ///     Err(ConfigError::NonPositive { field: "floor", value: 0.0 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("floor", self.floor),
            ("text_depth", self.text_depth),
            ("container_height", self.container_height),
            ("tallest_height", self.tallest_height),
            ("divider_clearance", self.divider_clearance),
            ("raised_divider_clearance", self.raised_divider_clearance),
            ("cut_height", self.cut_height),
            ("virtue_width", self.virtue_width),
            ("virtue_height", self.virtue_height),
            ("base_diameter", self.base_diameter),
            ("base_height", self.base_height),
            ("token_corner_radius", self.token_corner_radius),
            ("label_size", self.label_size),
            ("small_label_size", self.small_label_size),
        ];
        for (field, value) in scalars {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.corner_radius < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "corner_radius",
                value: self.corner_radius,
            });
        }
        for (field, piece) in [
            ("spore", self.spore),
            ("siege_trees", self.siege_trees),
            ("dungeon", self.dungeon),
        ] {
            if !piece.is_positive() {
                return Err(ConfigError::InvalidPiece { field });
            }
        }
        if let Some(&value) = self.virtue_stacks.iter().find(|d| **d <= 0.0) {
            return Err(ConfigError::NonPositive {
                field: "virtue_stacks",
                value,
            });
        }
        if self.raised_divider_clearance >= self.divider_clearance {
            return Err(ConfigError::ClearanceOrder {
                raised: self.raised_divider_clearance,
                full: self.divider_clearance,
            });
        }
        if self.end_steps.len() < 2 {
            return Err(ConfigError::ShortProfile(self.end_steps.len()));
        }
        if self.tokens_height() <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "tokens_height",
                value: self.tokens_height(),
            });
        }
        if self.segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegments(self.segments));
        }
        if self.label_font.trim().is_empty() {
            return Err(ConfigError::MissingFont);
        }
        Ok(())
    }
}

/// Error returned when a catalog value cannot describe real geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A dimension that must be positive is zero or negative.
    #[error("{field} must be positive: {value}")]
    NonPositive {
        /// Catalog field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A piece footprint has a non-positive side.
    #[error("piece {field} has a non-positive dimension")]
    InvalidPiece {
        /// Catalog field name.
        field: &'static str,
    },
    /// The raised clearance must stay below the full clearance.
    #[error("raised divider clearance {raised} must be below full clearance {full}")]
    ClearanceOrder {
        /// Raised clearance value.
        raised: f64,
        /// Full clearance value.
        full: f64,
    },
    /// The end profile needs at least two steps.
    #[error("end profile needs at least 2 steps, got {0}")]
    ShortProfile(usize),
    /// `$fn` too small to form a polygon.
    #[error("segments must be >= 3: {0}")]
    InvalidSegments(u32),
    /// No label font configured.
    #[error("label font must not be empty")]
    MissingFont,
}

#[cfg(test)]
mod tests;
