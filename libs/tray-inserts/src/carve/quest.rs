//! Quest, building base and dungeon tray.
//!
//! Covers the last step of the outline. Holds the round building bases
//! with a finger notch, two tower cuts, and the dungeon. The second tower
//! cut meets the base pocket at a concave corner that is filled back in
//! with a curved fillet.

use glam::{DVec2, DVec3};
use tracing::{info, instrument};
use tray_geometry::{GeometryError, Solid};

use super::{Carving, CavityKind, CavitySpec, LabelSpec, TrayContext};
use crate::builder::StepProfileBuilder;
use crate::error::{InsertError, InsertResult};
use crate::profile::Profile;

/// How far the finger notch reaches below the floor.
const NOTCH_DROP: f64 = 10.0;

/// Gap between the base pocket and the first tower cut.
const TOWER_GAP: f64 = 1.0;

/// Shift of the BASES label away from the pocket centre.
const BASES_LABEL_SHIFT: f64 = 5.0;

/// Outline of the quest tray: the last step pair.
pub fn profile(ctx: &TrayContext<'_>) -> InsertResult<Profile> {
    let all = Profile::from_pairs(&ctx.catalog.end_steps)?;
    all.slice(all.len() - 2..all.len())
}

/// Builds the quest tray.
#[instrument(skip(ctx))]
pub fn build(ctx: &TrayContext<'_>) -> InsertResult<Solid> {
    let catalog = ctx.catalog;
    let r = catalog.corner_radius;
    let floor = catalog.floor;
    let height = (catalog.dungeon.height / 2.0).max(catalog.base_height) + floor;
    let steps = profile(ctx)?;
    let y = steps.first().extent;
    let width = steps.last().offset;
    let depth = steps.last().extent - y;

    let outline = StepProfileBuilder::new(&steps, height, r);
    let mut carving = Carving::new(ctx, &outline)?;

    // Bases
    let base_dia = catalog.base_diameter;
    let base_centre = DVec2::new(-base_dia / 2.0, r + base_dia / 2.0 + y);
    let bases = CavitySpec::cylinder(
        "bases",
        base_centre.extend(floor),
        base_dia,
        catalog.cut_height,
        CavityKind::Pocket,
    );
    carving.cut(&bases)?;
    carving.cut(&CavitySpec::cylinder(
        "bases finger notch",
        DVec3::new(0.0, base_centre.y, floor - NOTCH_DROP),
        base_dia,
        catalog.cut_height,
        CavityKind::Notch,
    ))?;
    carving.engrave(
        &LabelSpec::new(
            "BASES",
            catalog.label_size,
            catalog.text_depth,
            DVec2::new(base_centre.x - BASES_LABEL_SHIFT, base_centre.y),
            floor,
        )
        .rotated(90.0),
    )?;

    // Towers, across the far end
    let towers = CavitySpec::pocket(
        "towers",
        DVec3::new(-width + r, y + r + base_dia + TOWER_GAP, floor),
        DVec3::new(
            width - 2.0 * r,
            depth - 2.0 * r - base_dia - TOWER_GAP,
            catalog.cut_height,
        ),
    );
    carving.cut(&towers)?;
    let towers_centre = towers.center();
    carving.engrave(
        &LabelSpec::new(
            "TOWERS",
            catalog.label_size,
            catalog.text_depth,
            towers_centre.truncate(),
            floor,
        )
        .rotated(180.0),
    )?;

    // Towers, beside the bases
    let base_third = base_dia / 3.0;
    let side_width = width - r - base_third;
    let side_cut = CavitySpec::pocket(
        "towers beside bases",
        DVec3::new(
            -side_width - base_third,
            y + 2.0 * r + catalog.dungeon.depth,
            floor,
        ),
        DVec3::new(
            side_width,
            depth - 3.0 * r - catalog.dungeon.depth,
            catalog.cut_height,
        ),
    );
    let side_cut_solid = carving.cut(&side_cut)?;
    carving.add(fillet(ctx, base_centre, height)?.intersection(&side_cut_solid));

    // Dungeon
    let dungeon = catalog.dungeon;
    let dungeon_pocket = CavitySpec::pocket(
        "dungeon",
        DVec3::new(-width + r, y + r, floor),
        DVec3::new(dungeon.width, dungeon.depth, dungeon.height),
    );
    carving.cut(&dungeon_pocket)?;
    carving.engrave(&LabelSpec::new(
        "DUNGN",
        catalog.label_size,
        catalog.text_depth,
        dungeon_pocket.center().truncate(),
        floor,
    ))?;

    let solid = carving.finish();
    info!(height, "Built quest tray");
    Ok(solid)
}

/// Ring of wall thickness `r` around the base pocket, from the floor to the
/// top of the tray.
///
/// The inner cylinder overshoots both ends of the ring so the two never
/// share a face.
fn fillet(ctx: &TrayContext<'_>, centre: DVec2, height: f64) -> InsertResult<Solid> {
    let catalog = ctx.catalog;
    let inner_radius = catalog.base_diameter / 2.0;
    let outer_radius = inner_radius + catalog.corner_radius;
    let ring_height = height - catalog.floor;
    let wrap = |e: GeometryError| InsertError::degenerate("base fillet", e);

    let outer = Solid::cylinder(ring_height, outer_radius).map_err(wrap)?;
    let inner = Solid::cylinder(ring_height + 2.0, inner_radius)
        .map_err(wrap)?
        .translate(DVec3::new(0.0, 0.0, -1.0));
    Ok(outer
        .difference(&inner)
        .translate(centre.extend(catalog.floor)))
}
