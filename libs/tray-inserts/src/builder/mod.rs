//! # Step Profile Builder
//!
//! Turns a [`Profile`] into a staircase of rounded boxes, one per pair of
//! consecutive steps.
//!
//! ## Layout
//!
//! ```text
//!   x ←  -offset[i+1]            0
//!         ┌──────────────────────┐  extent[i+1]
//!         │      segment i       │
//!         └──────────────────────┘  extent[i]
//! ```
//!
//! Segments grow toward −X from the origin edge and along +Y by extent.
//! Every segment except the last is lengthened by `2r` so its rounded end
//! overlaps the next segment and leaves no seam.
//!
//! In hollow-shell mode each box is inset by the wall thickness on both
//! footprint axes and starts at the floor, so subtracting it from the
//! solid of the same profile leaves a wall of that thickness.

use glam::DVec3;
use tracing::{debug, instrument};
use tray_geometry::{GeometryError, RoundedBox, Solid};

use crate::error::{InsertError, InsertResult};
use crate::profile::Profile;

/// Whether the builder fills the staircase or carves its interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildMode {
    /// Boxes run the full height from z = 0.
    Solid,
    /// Boxes inset by `wall`, starting at `floor`.
    Hollow { wall: f64, floor: f64 },
}

/// Placement of one segment's rounded box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Position in the profile, starting at 0 for the first step pair.
    pub index: usize,
    /// Corner of the box nearest the origin.
    pub origin: DVec3,
    /// Box dimensions including any overlap or trim.
    pub size: DVec3,
    /// Extent covered by the segment, before overlap or trim.
    pub delta: f64,
    /// Inset footprint, `(offset - 2 * inset) * delta`, before overlap.
    pub footprint_area: f64,
}

/// Builds the staircase solid of one profile.
///
/// # Example
///
/// ```rust
/// use tray_inserts::builder::StepProfileBuilder;
/// use tray_inserts::profile::Profile;
///
/// let profile = Profile::from_pairs(&[[0.0, 0.0], [45.0, 24.0]]).unwrap();
/// let solid = StepProfileBuilder::new(&profile, 10.0, 2.0).build().unwrap();
/// let size = solid.bounding_box().unwrap().size();
/// assert_eq!(size.to_array(), [45.0, 24.0, 10.0]);
/// ```
#[derive(Debug, Clone)]
pub struct StepProfileBuilder<'a> {
    profile: &'a Profile,
    height: f64,
    corner_radius: f64,
    mode: BuildMode,
    label: Option<String>,
}

impl<'a> StepProfileBuilder<'a> {
    /// Solid-mode builder.
    pub fn new(profile: &'a Profile, height: f64, corner_radius: f64) -> Self {
        Self {
            profile,
            height,
            corner_radius,
            mode: BuildMode::Solid,
            label: None,
        }
    }

    /// Switches to hollow-shell mode.
    pub fn hollow(mut self, wall: f64, floor: f64) -> Self {
        self.mode = BuildMode::Hollow { wall, floor };
        self
    }

    /// Names the build and enables per-segment area diagnostics.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Placement of every segment.
    ///
    /// The segment ending on the profile's final extent is the one that
    /// closes against the far boundary: it gets no overlap in solid mode and
    /// loses `2 * wall` in hollow mode.
    pub fn segments(&self) -> InsertResult<Vec<Segment>> {
        let steps = self.profile.steps();
        let final_extent = self.profile.last().extent;
        let (inset, z) = match self.mode {
            BuildMode::Solid => (0.0, 0.0),
            BuildMode::Hollow { wall, floor } => (wall, floor),
        };

        let mut last_extent = self.profile.first().extent;
        let mut segments = Vec::with_capacity(steps.len() - 1);
        for (index, step) in steps.iter().skip(1).enumerate() {
            let delta = step.extent - last_extent;
            if delta <= 0.0 {
                return Err(InsertError::degenerate(
                    format!("segment {index}"),
                    GeometryError::degenerate(format!(
                        "segment from extent {last_extent} to {} has no length",
                        step.extent
                    )),
                ));
            }
            let extra = if step.extent == final_extent {
                -2.0 * inset
            } else {
                2.0 * self.corner_radius
            };
            let width = step.offset - 2.0 * inset;
            segments.push(Segment {
                index,
                origin: DVec3::new(-step.offset + inset, last_extent + inset, z),
                size: DVec3::new(width, delta + extra, self.height),
                delta,
                footprint_area: width * delta,
            });
            last_extent = step.extent;
        }
        Ok(segments)
    }

    /// Union of one rounded box per segment.
    ///
    /// Every box is validated before any of them is composed.
    #[instrument(skip(self), fields(label = self.label.as_deref().unwrap_or("-")))]
    pub fn build(&self) -> InsertResult<Solid> {
        let segments = self.segments()?;
        let boxes = segments
            .iter()
            .map(|segment| {
                let context = match &self.label {
                    Some(label) => format!("{label} segment {}", segment.index),
                    None => format!("segment {}", segment.index),
                };
                RoundedBox::new(
                    segment.size.x,
                    segment.size.y,
                    segment.size.z,
                    self.corner_radius,
                )
                .and_then(|spec| spec.to_solid())
                .map(|solid| solid.translate(segment.origin))
                .map_err(|e| InsertError::degenerate(context, e))
            })
            .collect::<InsertResult<Vec<_>>>()?;

        if let Some(label) = &self.label {
            let mut total = 0.0;
            for segment in &segments {
                total += segment.footprint_area;
                debug!(
                    label = %label,
                    segment = segment.index,
                    width = segment.size.x,
                    depth = segment.delta,
                    area = segment.footprint_area,
                    "Segment footprint"
                );
            }
            debug!(label = %label, total, "Profile footprint total");
        }

        Ok(Solid::union_all(boxes))
    }
}

#[cfg(test)]
mod tests;
