//! # OpenSCAD Export
//!
//! Writes a [`Solid`] as an OpenSCAD source file.
//!
//! ## Output
//!
//! ```text
//! $fn = 90;
//!
//! difference() {
//!     hull() {
//!         translate([2, 2, 2]) sphere(r=2);
//!         ...
//!     }
//!     %translate([5, 5, 1]) cube([10, 10, 100]);
//! }
//! ```

mod printer;

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::MIN_SEGMENTS;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::solid::Solid;

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid output name {0:?}: use letters, digits, '-' or '_'")]
    InvalidName(String),

    #[error("curve resolution must be >= {min}: {segments}", min = MIN_SEGMENTS)]
    InvalidResolution { segments: u32 },
}

/// Renders solids to `.scad` files in one output directory.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tray_geometry::{ScadExporter, Solid};
///
/// let exporter = ScadExporter::new("out", 32).unwrap();
/// let scad = exporter.render(&Solid::cube(DVec3::splat(2.0)).unwrap());
/// assert_eq!(scad, "$fn = 32;\n\ncube([2, 2, 2]);\n");
/// ```
#[derive(Debug, Clone)]
pub struct ScadExporter {
    out_dir: PathBuf,
    segments: u32,
    include_background: bool,
}

impl ScadExporter {
    /// Exporter writing into `out_dir` with `segments` facets per full circle.
    pub fn new(out_dir: impl Into<PathBuf>, segments: u32) -> Result<Self, ExportError> {
        if segments < MIN_SEGMENTS {
            return Err(ExportError::InvalidResolution { segments });
        }
        Ok(Self {
            out_dir: out_dir.into(),
            segments,
            include_background: true,
        })
    }

    /// Whether `%` preview geometry is written. On by default.
    pub fn with_background(mut self, include: bool) -> Self {
        self.include_background = include;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// OpenSCAD source for `solid`.
    pub fn render(&self, solid: &Solid) -> String {
        let mut out = format!("$fn = {};\n\n", self.segments);
        if self.include_background {
            printer::write_solid(&mut out, solid, 0);
        } else {
            printer::write_solid(&mut out, &solid.strip_background(), 0);
        }
        out
    }

    /// Writes `<out_dir>/<name>.scad` and returns its path.
    #[instrument(skip(self, solid), fields(out_dir = %self.out_dir.display()))]
    pub fn export(&self, solid: &Solid, name: &str) -> Result<PathBuf, ExportError> {
        validate_name(name)?;
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("{name}.scad"));
        let source = self.render(solid);
        debug!(bytes = source.len(), "Rendered OpenSCAD source");
        fs::write(&path, source)?;
        info!(path = %path.display(), "Exported solid");
        Ok(path)
    }
}

fn validate_name(name: &str) -> Result<(), ExportError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ExportError::InvalidName(name.to_string()))
    }
}
