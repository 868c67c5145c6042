//! Virtue card tray.
//!
//! Five card stacks stand on edge, spread evenly across the width of the
//! tray's first step.

use glam::{DVec2, DVec3};
use tracing::{debug, info, instrument};
use tray_geometry::Solid;

use super::{distribute, Carving, CavitySpec, LabelSpec, TrayContext};
use crate::builder::StepProfileBuilder;
use crate::error::InsertResult;
use crate::profile::{Profile, ProfileAdjuster};

/// Outline of the virtue tray. Starts where the trees tray ends.
pub fn profile(ctx: &TrayContext<'_>) -> InsertResult<Profile> {
    let catalog = ctx.catalog;
    let raw = Profile::from_pairs(&catalog.end_steps)?.slice(3..6)?;
    ProfileAdjuster::raised(catalog)
        .apply(&raw)
        .with_extent(0, catalog.spore.width + 2.0 * catalog.corner_radius)
}

/// Builds the virtue tray.
#[instrument(skip(ctx))]
pub fn build(ctx: &TrayContext<'_>) -> InsertResult<Solid> {
    let catalog = ctx.catalog;
    let r = catalog.corner_radius;
    let height = catalog.virtue_height / 2.0 + catalog.floor;
    let steps = profile(ctx)?;
    let outline = StepProfileBuilder::new(&steps, height, r);
    let mut carving = Carving::new(ctx, &outline)?;

    let first = steps.first();
    let centre_y = (first.extent + steps.last().extent) / 2.0;
    let span = first.offset - r / 2.0;
    let starts = distribute(span, &catalog.virtue_stacks)?;
    debug!(span, ?starts, "Virtue layout");

    for (index, (depth, start)) in catalog.virtue_stacks.iter().zip(starts).enumerate() {
        let offset = r + start;
        let pocket = CavitySpec::pocket(
            format!("virtue {index}"),
            DVec3::new(
                -depth - offset,
                centre_y - catalog.virtue_width / 2.0,
                catalog.floor,
            ),
            DVec3::new(*depth, catalog.virtue_width, catalog.virtue_height),
        );
        carving.cut(&pocket)?;

        let centre = pocket.center();
        carving.engrave(
            &LabelSpec::new(
                "VIRTUE",
                catalog.small_label_size,
                catalog.text_depth,
                DVec2::new(centre.x, centre_y),
                catalog.floor,
            )
            .rotated(90.0),
        )?;
    }

    let solid = carving.finish();
    info!(height, stacks = catalog.virtue_stacks.len(), "Built virtue tray");
    Ok(solid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::TrayCatalog;
    use tray_geometry::{ScadTextProvider, SolidNode};

    #[test]
    fn test_profile() {
        let catalog = TrayCatalog::default();
        let ctx = TrayContext::new(&catalog, &ScadTextProvider);
        assert_eq!(
            profile(&ctx).unwrap().to_pairs(),
            vec![[51.0, 70.0], [55.0, 120.0], [59.0, 145.0]]
        );
    }

    #[test]
    fn test_five_pockets_and_labels() {
        let catalog = TrayCatalog::default();
        let ctx = TrayContext::new(&catalog, &ScadTextProvider);
        let tray = build(&ctx).unwrap();
        match tray.node() {
            // base, then a pocket and a label per stack
            SolidNode::Difference { children } => assert_eq!(children.len(), 11),
            other => panic!("Expected Difference, got {other:?}"),
        }
    }
}
