//! Clearance adjustment for the divider feature.

use config::TrayCatalog;

use super::{Profile, Step};

/// Pulls in every step whose offset exceeds `threshold` by that same
/// amount, leaving room for the divider that runs along the origin edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileAdjuster {
    threshold: f64,
}

impl ProfileAdjuster {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Full-height divider clearance.
    pub fn full(catalog: &TrayCatalog) -> Self {
        Self::new(catalog.divider_clearance)
    }

    /// Clearance for trays that sit above the divider.
    pub fn raised(catalog: &TrayCatalog) -> Self {
        Self::new(catalog.raised_divider_clearance)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Adjusted copy of `profile`.
    ///
    /// Extents are untouched, so the result is ordered whenever the input is.
    pub fn apply(&self, profile: &Profile) -> Profile {
        let steps = profile
            .steps()
            .iter()
            .map(|step| {
                if step.offset > self.threshold {
                    Step::new(step.offset - self.threshold, step.extent)
                } else {
                    *step
                }
            })
            .collect();
        Profile { steps }
    }
}
