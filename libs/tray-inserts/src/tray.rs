//! # Tray Registry
//!
//! The four trays, their export names and orientation, and the parallel
//! build over any selection of them.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use tray_geometry::Solid;

use crate::carve::{quest, tokens, trees, virtue, TrayContext};
use crate::error::TrayError;

/// One of the four inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tray {
    /// Spore cards and siege trees.
    Trees,
    /// Virtue card stacks.
    Virtue,
    /// Quest cards, building bases and the dungeon.
    Quest,
    /// Spirit and warrior tokens.
    Tokens,
}

impl Tray {
    /// Every tray, in export order.
    pub const ALL: [Tray; 4] = [Tray::Trees, Tray::Virtue, Tray::Quest, Tray::Tokens];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Tray::Trees => "trees",
            Tray::Virtue => "virtue",
            Tray::Quest => "quest",
            Tray::Tokens => "tokens",
        }
    }

    /// Output file stem.
    pub fn file_name(&self) -> &'static str {
        match self {
            Tray::Trees => "spore_trees",
            Tray::Virtue => "virtue",
            Tray::Quest => "quest_base_dungeon",
            Tray::Tokens => "tokens",
        }
    }

    /// Rotation applied when the tray is written out, in degrees.
    ///
    /// The tokens tray is turned a quarter so its long side lies along X.
    pub fn export_rotation(&self) -> DVec3 {
        match self {
            Tray::Tokens => DVec3::new(0.0, 0.0, 90.0),
            _ => DVec3::ZERO,
        }
    }

    /// `solid` in export orientation.
    pub fn orient_for_export(&self, solid: &Solid) -> Solid {
        let rotation = self.export_rotation();
        if rotation == DVec3::ZERO {
            solid.clone()
        } else {
            solid.rotate(rotation)
        }
    }

    /// Builds this tray.
    pub fn build(&self, ctx: &TrayContext<'_>) -> Result<Solid, TrayError> {
        let result = match self {
            Tray::Trees => trees::build(ctx),
            Tray::Virtue => virtue::build(ctx),
            Tray::Quest => quest::build(ctx),
            Tray::Tokens => tokens::build(ctx),
        };
        result.map_err(|error| TrayError { tray: *self, error })
    }
}

impl fmt::Display for Tray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tray {
    type Err = String;

    /// Accepts the short name or the file stem.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tray::ALL
            .into_iter()
            .find(|tray| tray.name() == s || tray.file_name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Tray::ALL.iter().map(Tray::name).collect();
                format!("unknown tray {s:?}, expected one of {}", names.join(", "))
            })
    }
}

/// Builds `trays` in parallel. Results keep the order of `trays`; one
/// tray failing does not stop the others.
#[instrument(skip(ctx), fields(count = trays.len()))]
pub fn build_all(trays: &[Tray], ctx: &TrayContext<'_>) -> Vec<(Tray, Result<Solid, TrayError>)> {
    let results: Vec<_> = trays
        .par_iter()
        .map(|tray| (*tray, tray.build(ctx)))
        .collect();
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    if failed > 0 {
        warn!(failed, "Some trays failed to build");
    } else {
        info!("All trays built");
    }
    results
}

/// All four trays stacked as they sit in the box.
///
/// The trees and virtue trays rest on top of the tokens tray, pulled back
/// by the divider clearance.
#[instrument(skip(ctx))]
pub fn assembly(ctx: &TrayContext<'_>) -> Result<Solid, TrayError> {
    let catalog = ctx.catalog;
    let lower = Tray::Quest.build(ctx)?.union(&Tray::Tokens.build(ctx)?);
    let upper = Tray::Trees.build(ctx)?.union(&Tray::Virtue.build(ctx)?);
    let lift = DVec3::new(-catalog.divider_clearance, 0.0, catalog.tokens_height());
    Ok(lower.union(&upper.translate(lift)))
}
