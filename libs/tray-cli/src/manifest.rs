//! JSON record of one generator run: the catalog it used and what became of
//! each requested tray.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::TrayCatalog;
use serde::Serialize;
use tray_geometry::Aabb;

/// Outcome of one exported solid.
#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Aabb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ManifestEntry {
    pub fn exported(name: impl Into<String>, path: PathBuf, bounds: Option<Aabb>) -> Self {
        Self {
            name: name.into(),
            path: Some(path),
            bounds,
            error: None,
        }
    }

    pub fn failed(name: impl Into<String>, error: &dyn std::error::Error) -> Self {
        Self {
            name: name.into(),
            path: None,
            bounds: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub segments: u32,
    pub preview_cavities: bool,
    pub catalog: &'a TrayCatalog,
    pub trays: Vec<ManifestEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly: Option<ManifestEntry>,
}

impl<'a> Manifest<'a> {
    pub fn new(catalog: &'a TrayCatalog, segments: u32, preview_cavities: bool) -> Self {
        Self {
            segments,
            preview_cavities,
            catalog,
            trays: Vec::new(),
            assembly: None,
        }
    }

    /// Names of every entry that failed, assembly included.
    pub fn failures(&self) -> Vec<&str> {
        self.trays
            .iter()
            .chain(self.assembly.as_ref())
            .filter(|entry| entry.is_failure())
            .map(|entry| entry.name.as_str())
            .collect()
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing manifest {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_failures_include_assembly() {
        let catalog = TrayCatalog::default();
        let mut manifest = Manifest::new(&catalog, 90, false);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        manifest.trays.push(ManifestEntry::exported(
            "trees",
            PathBuf::from("spore_trees.scad"),
            None,
        ));
        manifest.trays.push(ManifestEntry::failed("quest", &io));
        manifest.assembly = Some(ManifestEntry::failed("together", &io));
        assert_eq!(manifest.failures(), vec!["quest", "together"]);
    }

    #[test]
    fn test_json_omits_missing_fields() {
        let catalog = TrayCatalog::default();
        let mut manifest = Manifest::new(&catalog, 32, true);
        let bounds = Aabb::new(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0));
        manifest.trays.push(ManifestEntry::exported(
            "virtue",
            PathBuf::from("virtue.scad"),
            Some(bounds),
        ));
        let json: serde_json::Value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["segments"], 32);
        assert_eq!(json["preview_cavities"], true);
        assert_eq!(json["catalog"]["floor"], catalog.floor);
        let entry = &json["trays"][0];
        assert_eq!(entry["name"], "virtue");
        assert!(entry.get("error").is_none());
        assert!(json.get("assembly").is_none());
    }
}
