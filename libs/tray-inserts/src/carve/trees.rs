//! Spore and siege-tree tray.
//!
//! Sits above the divider, so its outline takes the raised clearance. The
//! far end is squared off just past the spore stack.

use glam::{DVec2, DVec3};
use tracing::{info, instrument};
use tray_geometry::{HAlign, Solid};

use super::{Carving, CavitySpec, LabelSpec, TrayContext};
use crate::builder::StepProfileBuilder;
use crate::error::InsertResult;
use crate::profile::{Profile, ProfileAdjuster};

/// Label offset from the centre of the siege pocket, per word.
const SIEGE_LABEL_SPREAD: f64 = 3.0;

/// Distance of the spore label from the spore pocket wall.
const SPORE_LABEL_GAP: f64 = 3.0;

/// Outline of the trees tray.
pub fn profile(ctx: &TrayContext<'_>) -> InsertResult<Profile> {
    let catalog = ctx.catalog;
    let raw = Profile::from_pairs(&catalog.end_steps)?.slice(0..5)?;
    let adjusted = ProfileAdjuster::raised(catalog).apply(&raw);
    let last = adjusted.last_index();
    let previous_offset = adjusted.steps()[last - 1].offset;
    adjusted
        .with_offset(last, previous_offset)?
        .with_extent(last, catalog.spore.width + 2.0 * catalog.corner_radius)
}

/// Builds the trees tray.
#[instrument(skip(ctx))]
pub fn build(ctx: &TrayContext<'_>) -> InsertResult<Solid> {
    let catalog = ctx.catalog;
    let r = catalog.corner_radius;
    let height = catalog.siege_trees.height / 2.0 + catalog.floor;
    let steps = profile(ctx)?;
    let outline = StepProfileBuilder::new(&steps, height, r).with_label("Trees");
    let mut carving = Carving::new(ctx, &outline)?;

    let spore = catalog.spore;
    let spore_pocket = CavitySpec::pocket(
        "spore",
        DVec3::new(-spore.depth - r, r, height - spore.height / 2.0 - 3.0),
        DVec3::new(spore.depth, spore.width, spore.height),
    );
    carving.cut(&spore_pocket)?;

    let label_y = catalog.siege_trees.width + r + 1.0;
    let surface = height;
    carving.engrave(
        &LabelSpec::new(
            "SPORE",
            catalog.label_size,
            catalog.text_depth,
            DVec2::new(spore_pocket.min().x - SPORE_LABEL_GAP, label_y),
            surface,
        )
        .with_halign(HAlign::Left)
        .rotated(90.0),
    )?;

    let siege = catalog.siege_trees;
    let siege_pocket = CavitySpec::pocket(
        "siege trees",
        DVec3::new(-steps.steps()[1].offset + r, r, catalog.floor),
        DVec3::new(siege.depth, siege.width, siege.height),
    );
    carving.cut(&siege_pocket)?;

    let siege_x = siege_pocket.center().x - SIEGE_LABEL_SPREAD;
    for (text, shift) in [("SIEGE", SIEGE_LABEL_SPREAD), ("TREES", -SIEGE_LABEL_SPREAD)] {
        carving.engrave(
            &LabelSpec::new(
                text,
                catalog.label_size,
                catalog.text_depth,
                DVec2::new(siege_x + shift, label_y),
                surface,
            )
            .with_halign(HAlign::Right)
            .rotated(-90.0),
        )?;
    }

    let solid = carving.finish();
    info!(height, "Built trees tray");
    Ok(solid)
}
