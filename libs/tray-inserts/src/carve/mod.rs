//! # Cavity Carving
//!
//! Shared machinery for the four tray carvers.
//!
//! A carver builds its tray's outer solid with the step-profile builder,
//! then records cavities, labels and additions on a [`Carving`]. Each
//! record is validated as it is made, against the stepped outline of the
//! outer solid. Composition happens once, in [`Carving::finish`], after every
//! record has passed.
//!
//! ## Cavity Kinds
//!
//! | Kind | Rule |
//! |------|------|
//! | [`CavityKind::Pocket`] | footprint inside the stepped outline, bottom at or above the floor |
//! | [`CavityKind::Notch`] | must touch the envelope; may cut through a wall or the floor |

pub mod quest;
pub mod tokens;
pub mod trees;
pub mod virtue;

use config::constants::EPSILON;
use config::TrayCatalog;
use glam::{DVec2, DVec3};
use tracing::debug;
use tray_geometry::{
    Aabb, GeometryError, HAlign, RenderMode, Solid, TextGeometryProvider, TextStyle, VAlign,
};

use crate::builder::{Segment, StepProfileBuilder};
use crate::error::{InsertError, InsertResult};

// =============================================================================
// CONTEXT
// =============================================================================

/// Toggles that change how trays are rendered, never their dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrayOptions {
    /// Show cavities as `%` ghosts instead of cutting them.
    pub preview_cavities: bool,
}

/// Everything a carver reads.
#[derive(Clone, Copy)]
pub struct TrayContext<'a> {
    pub catalog: &'a TrayCatalog,
    pub text: &'a dyn TextGeometryProvider,
    pub options: TrayOptions,
}

impl<'a> TrayContext<'a> {
    pub fn new(catalog: &'a TrayCatalog, text: &'a dyn TextGeometryProvider) -> Self {
        Self {
            catalog,
            text,
            options: TrayOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TrayOptions) -> Self {
        self.options = options;
        self
    }

    fn cavity_mode(&self) -> RenderMode {
        if self.options.preview_cavities {
            RenderMode::Background
        } else {
            RenderMode::Final
        }
    }
}

impl std::fmt::Debug for TrayContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrayContext")
            .field("catalog", &self.catalog)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// CAVITIES
// =============================================================================

/// How a cavity may relate to the tray envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CavityKind {
    Pocket,
    Notch,
}

/// Shape of a cavity, anchored at its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CavityShape {
    /// Box with its minimum corner at the origin.
    Box { size: DVec3 },
    /// Upright cylinder centred on the origin, standing on its plane.
    Cylinder { diameter: f64, height: f64 },
}

/// One subtractive volume derived from catalog dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct CavitySpec {
    pub name: String,
    pub origin: DVec3,
    pub shape: CavityShape,
    pub kind: CavityKind,
    /// Turn about Z, in degrees, around the origin.
    pub rotation: f64,
}

impl CavitySpec {
    /// Box pocket with its minimum corner at `origin`.
    pub fn pocket(name: impl Into<String>, origin: DVec3, size: DVec3) -> Self {
        Self {
            name: name.into(),
            origin,
            shape: CavityShape::Box { size },
            kind: CavityKind::Pocket,
            rotation: 0.0,
        }
    }

    /// Cylindrical cavity with its base centred on `origin`.
    pub fn cylinder(
        name: impl Into<String>,
        origin: DVec3,
        diameter: f64,
        height: f64,
        kind: CavityKind,
    ) -> Self {
        Self {
            name: name.into(),
            origin,
            shape: CavityShape::Cylinder { diameter, height },
            kind,
            rotation: 0.0,
        }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Centre of the cavity footprint, before rotation.
    pub fn center(&self) -> DVec3 {
        match self.shape {
            CavityShape::Box { size } => self.origin + size * 0.5,
            CavityShape::Cylinder { height, .. } => self.origin + DVec3::Z * (height * 0.5),
        }
    }

    /// Minimum corner of the unrotated footprint.
    pub fn min(&self) -> DVec3 {
        match self.shape {
            CavityShape::Box { .. } => self.origin,
            CavityShape::Cylinder { diameter, .. } => {
                self.origin - DVec3::new(diameter / 2.0, diameter / 2.0, 0.0)
            }
        }
    }

    /// The cavity as a final-mode solid.
    pub fn to_solid(&self) -> InsertResult<Solid> {
        let shape = match self.shape {
            CavityShape::Box { size } => Solid::cube(size),
            CavityShape::Cylinder { diameter, height } => Solid::cylinder(height, diameter / 2.0),
        }
        .map_err(|e| InsertError::degenerate(format!("cavity {}", self.name), e))?;
        let shape = if self.rotation == 0.0 {
            shape
        } else {
            shape.rotate_z(self.rotation)
        };
        Ok(shape.translate(self.origin))
    }
}

// =============================================================================
// LABELS
// =============================================================================

/// One engraved label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub text: String,
    pub size: f64,
    pub halign: HAlign,
    /// Depth of the recess below the surface.
    pub depth: f64,
    /// Anchor point on the recess floor.
    pub position: DVec3,
    /// Turn about Z, in degrees.
    pub rotation: f64,
}

impl LabelSpec {
    /// Centred label at `at` whose recess floor sits `depth` below `surface`.
    pub fn new(text: impl Into<String>, size: f64, depth: f64, at: DVec2, surface: f64) -> Self {
        Self {
            text: text.into(),
            size,
            halign: HAlign::Center,
            depth,
            position: at.extend(surface - depth),
            rotation: 0.0,
        }
    }

    pub fn with_halign(mut self, halign: HAlign) -> Self {
        self.halign = halign;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Outline from `provider`, extruded one unit past the surface and placed.
    pub fn to_solid(&self, provider: &dyn TextGeometryProvider, font: &str) -> InsertResult<Solid> {
        let style = TextStyle::new(self.size, font)
            .with_halign(self.halign)
            .with_valign(VAlign::Center);
        let outline = provider
            .outline(&self.text, &style)
            .map_err(|source| InsertError::LabelRenderingFailure {
                label: self.text.clone(),
                source,
            })?;
        let slab = outline
            .linear_extrude(self.depth + 1.0)
            .map_err(|e| InsertError::degenerate(format!("label {}", self.text), e))?;
        let slab = if self.rotation == 0.0 {
            slab
        } else {
            slab.rotate_z(self.rotation)
        };
        Ok(slab.translate(self.position))
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Start positions that spread `widths` evenly across `span`.
///
/// The first item starts at 0 and, when there is more than one, the last
/// ends exactly at `span`; every gap is `(span - sum) / (n - 1)`.
///
/// # Example
///
/// ```rust
/// use tray_inserts::carve::distribute;
///
/// let starts = distribute(50.0, &[9.0, 7.0, 7.0, 7.0, 7.0]).unwrap();
/// assert_eq!(starts, vec![0.0, 12.25, 22.5, 32.75, 43.0]);
/// ```
pub fn distribute(span: f64, widths: &[f64]) -> InsertResult<Vec<f64>> {
    let total: f64 = widths.iter().sum();
    if total > span + EPSILON {
        return Err(InsertError::degenerate(
            "cavity distribution",
            GeometryError::degenerate(format!(
                "{} cavities of total width {total} do not fit in {span}",
                widths.len()
            )),
        ));
    }
    let Some((&last, rest)) = widths.split_last() else {
        return Ok(Vec::new());
    };
    if rest.is_empty() {
        return Ok(vec![0.0]);
    }
    let gap = (span - total) / rest.len() as f64;
    let mut starts = Vec::with_capacity(widths.len());
    let mut position = 0.0;
    for width in rest {
        starts.push(position);
        position += width + gap;
    }
    starts.push(span - last);
    Ok(starts)
}

// =============================================================================
// CARVING
// =============================================================================

enum Operation {
    Cut(Solid),
    Add(Solid),
}

/// Part of the outline covered by one step: the extent range it spans and
/// how far toward −X the tray reaches there.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Stair {
    from: f64,
    to: f64,
    reach: f64,
}

impl Stair {
    fn overlaps(&self, bounds: &Aabb) -> bool {
        bounds.min.y < self.to - EPSILON && bounds.max.y > self.from + EPSILON
    }
}

impl From<&Segment> for Stair {
    fn from(segment: &Segment) -> Self {
        Self {
            from: segment.origin.y,
            to: segment.origin.y + segment.delta,
            reach: segment.origin.x,
        }
    }
}

/// Validated record of what to carve from one tray.
pub(crate) struct Carving<'a> {
    ctx: &'a TrayContext<'a>,
    base: Solid,
    envelope: Aabb,
    stairs: Vec<Stair>,
    operations: Vec<Operation>,
}

impl<'a> Carving<'a> {
    /// Starts from the solid built by `outline`. Its bounding box becomes
    /// the envelope and its steps the silhouette pockets must stay inside.
    pub(crate) fn new(
        ctx: &'a TrayContext<'a>,
        outline: &StepProfileBuilder<'_>,
    ) -> InsertResult<Self> {
        let base = outline.build()?;
        let stairs = outline.segments()?.iter().map(Stair::from).collect();
        let envelope = base.bounding_box().ok_or_else(|| {
            InsertError::degenerate(
                "tray envelope",
                GeometryError::degenerate("outer solid has no volume"),
            )
        })?;
        Ok(Self {
            ctx,
            base,
            envelope,
            stairs,
            operations: Vec::new(),
        })
    }

    /// Adds material that the envelope check ignores.
    pub(crate) fn add(&mut self, solid: Solid) {
        self.operations.push(Operation::Add(solid));
    }

    /// Checks and records a cavity. Returns its final-mode solid.
    pub(crate) fn cut(&mut self, cavity: &CavitySpec) -> InsertResult<Solid> {
        let solid = cavity.to_solid()?;
        self.cut_solid(&cavity.name, &solid, cavity.kind)?;
        Ok(solid)
    }

    /// Checks and records an arbitrary cavity solid against its bounds.
    pub(crate) fn cut_solid(
        &mut self,
        name: &str,
        solid: &Solid,
        kind: CavityKind,
    ) -> InsertResult<()> {
        let bounds = bounds_of(name, solid)?;
        self.check(name, &bounds, kind)?;
        self.record(name, solid, kind, &bounds);
        Ok(())
    }

    /// Builds a stepped pocket and records it. Each of its segments is
    /// checked on its own, so a pocket that follows the outline passes even
    /// where its overall bounds would not.
    pub(crate) fn cut_staircase(
        &mut self,
        name: &str,
        pocket: &StepProfileBuilder<'_>,
    ) -> InsertResult<Solid> {
        let solid = pocket.build()?;
        for segment in pocket.segments()? {
            let bounds = Aabb::new(segment.origin, segment.origin + segment.size);
            self.check(
                &format!("{name} segment {}", segment.index),
                &bounds,
                CavityKind::Pocket,
            )?;
        }
        let bounds = bounds_of(name, &solid)?;
        self.record(name, &solid, CavityKind::Pocket, &bounds);
        Ok(solid)
    }

    fn check(&self, name: &str, bounds: &Aabb, kind: CavityKind) -> InsertResult<()> {
        let inside = match kind {
            CavityKind::Pocket => {
                self.envelope.contains_footprint(bounds, EPSILON)
                    && bounds.min.z >= self.envelope.min.z - EPSILON
                    && self
                        .stairs
                        .iter()
                        .filter(|stair| stair.overlaps(bounds))
                        .all(|stair| bounds.min.x >= stair.reach - EPSILON)
            }
            CavityKind::Notch => self.envelope.overlaps(bounds),
        };
        if inside {
            Ok(())
        } else {
            Err(InsertError::OutOfBoundsCavity {
                cavity: name.to_string(),
                bounds: *bounds,
                envelope: self.envelope,
            })
        }
    }

    fn record(&mut self, name: &str, solid: &Solid, kind: CavityKind, bounds: &Aabb) {
        debug!(
            cavity = name,
            ?kind,
            min = ?bounds.min.to_array(),
            max = ?bounds.max.to_array(),
            "Cavity"
        );
        self.operations
            .push(Operation::Cut(solid.with_mode(self.ctx.cavity_mode())));
    }

    /// Renders and records a label recess.
    pub(crate) fn engrave(&mut self, label: &LabelSpec) -> InsertResult<()> {
        let solid = label.to_solid(self.ctx.text, &self.ctx.catalog.label_font)?;
        debug!(label = %label.text, position = ?label.position.to_array(), "Label");
        self.operations.push(Operation::Cut(solid));
        Ok(())
    }

    /// Applies every recorded operation in order.
    pub(crate) fn finish(self) -> Solid {
        self.operations
            .into_iter()
            .fold(self.base, |solid, operation| match operation {
                Operation::Cut(cut) => solid.difference(&cut),
                Operation::Add(add) => solid.union(&add),
            })
    }
}

fn bounds_of(name: &str, solid: &Solid) -> InsertResult<Aabb> {
    solid.bounding_box().ok_or_else(|| {
        InsertError::degenerate(
            format!("cavity {name}"),
            GeometryError::degenerate("cavity has no volume"),
        )
    })
}
