//! Token tray.
//!
//! Fills the height left under the tallest piece and spans every step but
//! the last. Four rounded pockets are carved with the hollow-shell builder,
//! each over its own slice of the outline, and a raised lip along the
//! origin edge carries the divider.

use glam::{DVec2, DVec3};
use tracing::{info, instrument};
use tray_geometry::{hull, GeometryError, Solid};

use super::{Carving, LabelSpec, TrayContext};
use crate::builder::StepProfileBuilder;
use crate::error::{InsertError, InsertResult};
use crate::profile::Profile;

/// One token pocket: its label and the outline slice it is carved over.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPocket {
    pub label: &'static str,
    pub profile: Profile,
}

/// Outline of the tokens tray: every step except the last.
pub fn profile(ctx: &TrayContext<'_>) -> InsertResult<Profile> {
    let all = Profile::from_pairs(&ctx.catalog.end_steps)?;
    all.slice(0..all.len() - 1)
}

/// Outline slices of the four pockets, in order along the tray.
///
/// Each pocket after the first starts one wall short of where the previous
/// one ended.
pub fn pockets(ctx: &TrayContext<'_>) -> InsertResult<Vec<TokenPocket>> {
    let catalog = ctx.catalog;
    let r = catalog.corner_radius;
    let steps = profile(ctx)?;

    let spirit_a = steps.slice(0..3)?;

    let spirit_b = steps.slice(2..5)?;
    let spirit_b = spirit_b
        .with_extent(0, spirit_b.first().extent - r)?
        .with_extent(
            spirit_b.last_index(),
            spirit_b.last().extent - catalog.spirit_pocket_trim,
        )?;

    let warrior_a = steps.slice(3..5)?;
    let warrior_a = warrior_a
        .with_extent(0, spirit_b.last().extent - r)?
        .with_extent(
            warrior_a.last_index(),
            warrior_a.last().extent - catalog.warrior_pocket_trim,
        )?;

    let warrior_b = steps
        .slice(3..6)?
        .with_extent(0, warrior_a.last().extent - r)?;

    Ok([
        ("SPIRIT", spirit_a),
        ("SPIRIT", spirit_b),
        ("WARRIOR", warrior_a),
        ("WARRIOR", warrior_b),
    ]
    .into_iter()
    .map(|(label, profile)| TokenPocket { label, profile })
    .collect())
}

/// Builds the tokens tray.
#[instrument(skip(ctx))]
pub fn build(ctx: &TrayContext<'_>) -> InsertResult<Solid> {
    let catalog = ctx.catalog;
    let r = catalog.corner_radius;
    let height = catalog.tokens_height();
    let steps = profile(ctx)?;
    let outline = StepProfileBuilder::new(&steps, height, r);
    let mut carving = Carving::new(ctx, &outline)?;

    carving.add(lip(ctx, height, steps.last().extent)?);

    for (index, pocket) in pockets(ctx)?.iter().enumerate() {
        let name = format!("{} {}", pocket.label.to_lowercase(), index);
        let shell = StepProfileBuilder::new(
            &pocket.profile,
            catalog.cut_height,
            catalog.token_corner_radius,
        )
        .hollow(r, catalog.floor)
        .with_label(name.as_str());
        carving.cut_staircase(&name, &shell)?;

        let first = pocket.profile.first();
        let centre = DVec2::new(
            -pocket.profile.steps()[1].offset / 2.0,
            (first.extent + pocket.profile.last().extent) / 2.0,
        );
        carving.engrave(&LabelSpec::new(
            pocket.label,
            catalog.label_size,
            catalog.text_depth,
            centre,
            catalog.floor,
        ))?;
    }

    let solid = carving.finish();
    info!(height, "Built tokens tray");
    Ok(solid)
}

/// Hard edge along the origin side for the divider to rest on.
///
/// At each end a short horizontal cylinder sits at the tray top and a second
/// one reaches past the edge; a sphere on the floor below rounds the foot.
/// The hull of all six parts forms one ramp.
fn lip(ctx: &TrayContext<'_>, height: f64, depth: f64) -> InsertResult<Solid> {
    let catalog = ctx.catalog;
    let r = catalog.corner_radius;
    let wrap = |e: GeometryError| InsertError::degenerate("divider lip", e);

    let edge = Solid::cylinder(r, r)
        .map_err(wrap)?
        .rotate(DVec3::new(0.0, -90.0, 0.0))
        .translate(DVec3::new(0.0, 0.0, height - r));
    let foot = Solid::sphere(r).map_err(wrap)?;

    let inset = r + catalog.token_lip_inset;
    let parts = [inset, depth - inset].into_iter().flat_map(|y| {
        [
            edge.translate(DVec3::new(0.0, y, 0.0)),
            edge.translate(DVec3::new(catalog.token_lip_extra_width, y, 0.0)),
            foot.translate(DVec3::new(-r, y, r)),
        ]
    });
    Ok(hull(parts))
}
