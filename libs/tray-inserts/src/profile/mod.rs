//! # Step Profiles
//!
//! A [`Profile`] is the staircase outline of one region of the container:
//! an ordered list of `(offset, extent)` steps. `extent` runs along the
//! container's long side and never decreases; `offset` is how far the
//! container wall reaches at that extent.
//!
//! Profiles are values. Slicing, adjusting and editing a step all return a
//! new profile, so trays that start from the same catalog outline can never
//! see each other's edits.
//!
//! ## Example
//!
//! ```rust
//! use tray_inserts::profile::{Profile, ProfileAdjuster};
//!
//! let raw = Profile::from_pairs(&[[10.0, 0.0], [5.0, 24.0]]).unwrap();
//! let adjusted = ProfileAdjuster::new(8.0).apply(&raw);
//! assert_eq!(adjusted.to_pairs(), vec![[2.0, 0.0], [5.0, 24.0]]);
//! assert_eq!(raw.to_pairs(), vec![[10.0, 0.0], [5.0, 24.0]]);
//! ```

mod adjust;

pub use adjust::ProfileAdjuster;

use std::ops::Range;

use serde::Serialize;

use crate::error::{InsertError, InsertResult};

/// One corner of the staircase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    /// Reach of the wall, measured from the origin edge.
    pub offset: f64,
    /// Position along the profile.
    pub extent: f64,
}

impl Step {
    pub const fn new(offset: f64, extent: f64) -> Self {
        Self { offset, extent }
    }
}

/// Validated, immutable staircase outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    steps: Vec<Step>,
}

impl Profile {
    /// Validates and wraps `steps`.
    ///
    /// Requires at least two steps, finite coordinates, and extents that
    /// never decrease. Zero-length segments pass here and are rejected by
    /// the builder, which knows the corner radius they would need.
    pub fn new(steps: impl IntoIterator<Item = Step>) -> InsertResult<Self> {
        let steps: Vec<Step> = steps.into_iter().collect();
        if steps.len() < 2 {
            return Err(InsertError::profile(
                steps.len(),
                format!("a profile needs at least 2 steps, got {}", steps.len()),
            ));
        }
        for (index, step) in steps.iter().enumerate() {
            if !(step.offset.is_finite() && step.extent.is_finite()) {
                return Err(InsertError::profile(index, format!("non-finite step {step:?}")));
            }
        }
        for (index, pair) in steps.windows(2).enumerate() {
            if pair[1].extent < pair[0].extent {
                return Err(InsertError::profile(
                    index + 1,
                    format!(
                        "extent decreases from {} to {}",
                        pair[0].extent, pair[1].extent
                    ),
                ));
            }
        }
        Ok(Self { steps })
    }

    /// Profile from catalog `[offset, extent]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> InsertResult<Self> {
        Self::new(pairs.iter().map(|[offset, extent]| Step::new(*offset, *extent)))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; a profile has at least two steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Step {
        self.steps[0]
    }

    pub fn last(&self) -> Step {
        self.steps[self.steps.len() - 1]
    }

    /// Index of the last step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Steps in `range` as a new profile.
    pub fn slice(&self, range: Range<usize>) -> InsertResult<Self> {
        match self.steps.get(range.clone()) {
            Some(steps) => Self::new(steps.iter().copied()),
            None => Err(InsertError::profile(
                range.end,
                format!("slice {range:?} outside profile of {} steps", self.len()),
            )),
        }
    }

    /// Copy with step `index` replaced.
    pub fn with_step(&self, index: usize, step: Step) -> InsertResult<Self> {
        if index >= self.steps.len() {
            return Err(InsertError::profile(
                index,
                format!("no step {index} in profile of {} steps", self.len()),
            ));
        }
        let mut steps = self.steps.clone();
        steps[index] = step;
        Self::new(steps)
    }

    /// Copy with the extent of step `index` replaced.
    pub fn with_extent(&self, index: usize, extent: f64) -> InsertResult<Self> {
        let step = self.step(index)?;
        self.with_step(index, Step::new(step.offset, extent))
    }

    /// Copy with the offset of step `index` replaced.
    pub fn with_offset(&self, index: usize, offset: f64) -> InsertResult<Self> {
        let step = self.step(index)?;
        self.with_step(index, Step::new(offset, step.extent))
    }

    fn step(&self, index: usize) -> InsertResult<Step> {
        self.steps.get(index).copied().ok_or_else(|| {
            InsertError::profile(index, format!("no step {index} in profile of {} steps", self.len()))
        })
    }

    /// Footprint area of each segment: `offset[i+1] * (extent[i+1] - extent[i])`.
    pub fn segment_areas(&self) -> Vec<f64> {
        self.steps
            .windows(2)
            .map(|pair| pair[1].offset * (pair[1].extent - pair[0].extent))
            .collect()
    }

    /// Area enclosed between the staircase and the origin edge.
    pub fn area(&self) -> f64 {
        self.segment_areas().iter().sum()
    }

    /// Catalog form, `[offset, extent]` per step.
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.steps.iter().map(|s| [s.offset, s.extent]).collect()
    }
}
