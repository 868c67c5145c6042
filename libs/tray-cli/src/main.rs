//! trays - OpenSCAD generator for the board game tray inserts
//!
//! Builds the selected trays from the default catalog and writes one
//! `.scad` file per tray, turned to its print orientation.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use config::TrayCatalog;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tray_geometry::{ScadExporter, ScadTextProvider, Solid};
use tray_inserts::{assembly, build_all, Tray, TrayContext, TrayOptions};

mod manifest;

use manifest::{Manifest, ManifestEntry};

/// File stem of the stacked assembly preview.
const ASSEMBLY_NAME: &str = "together";

#[derive(Parser, Debug)]
#[command(name = "trays")]
#[command(about = "Generate OpenSCAD sources for the tray inserts", long_about = None)]
struct Cli {
    /// Directory the .scad files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Facets per full circle ($fn); defaults to the catalog value
    #[arg(short, long)]
    segments: Option<u32>,

    /// Build only this tray (trees, virtue, quest, tokens); repeatable
    #[arg(long = "only", value_name = "TRAY")]
    only: Vec<Tray>,

    /// Also write all trays stacked as they sit in the box
    #[arg(long)]
    assembly: bool,

    /// Show cavities as transparent preview geometry instead of cutting them
    #[arg(long)]
    preview_cavities: bool,

    /// Write a JSON manifest of the run to this path
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Log build diagnostics
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Requested trays in export order, each once.
    fn trays(&self) -> Vec<Tray> {
        if self.only.is_empty() {
            return Tray::ALL.to_vec();
        }
        Tray::ALL
            .into_iter()
            .filter(|tray| self.only.contains(tray))
            .collect()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let catalog = TrayCatalog::default();
    catalog.validate()?;

    let segments = cli.segments.unwrap_or(catalog.segments);
    let exporter = ScadExporter::new(&cli.out_dir, segments)?;
    let ctx = TrayContext::new(&catalog, &ScadTextProvider).with_options(TrayOptions {
        preview_cavities: cli.preview_cavities,
    });
    let mut manifest = Manifest::new(&catalog, segments, cli.preview_cavities);

    for (tray, result) in build_all(&cli.trays(), &ctx) {
        let entry = match result {
            Ok(solid) => {
                let oriented = tray.orient_for_export(&solid);
                export(&exporter, &oriented, tray.name(), tray.file_name())
            }
            Err(err) => {
                error!(%tray, error = %err, "Tray skipped");
                ManifestEntry::failed(tray.name(), &err)
            }
        };
        manifest.trays.push(entry);
    }

    if cli.assembly {
        let entry = match assembly(&ctx) {
            Ok(solid) => export(&exporter, &solid, ASSEMBLY_NAME, ASSEMBLY_NAME),
            Err(err) => {
                error!(error = %err, "Assembly skipped");
                ManifestEntry::failed(ASSEMBLY_NAME, &err)
            }
        };
        manifest.assembly = Some(entry);
    }

    if let Some(path) = &cli.manifest {
        manifest.write(path)?;
        info!(path = %path.display(), "Wrote manifest");
    }

    let failures = manifest.failures();
    if !failures.is_empty() {
        bail!("failed to generate: {}", failures.join(", "));
    }
    Ok(())
}

/// Writes one solid. Write failures end up in the entry.
fn export(exporter: &ScadExporter, solid: &Solid, name: &str, file_name: &str) -> ManifestEntry {
    match exporter.export(solid, file_name) {
        Ok(path) => ManifestEntry::exported(name, path, solid.bounding_box()),
        Err(err) => {
            error!(output = name, error = %err, "Export failed");
            ManifestEntry::failed(name, &err)
        }
    }
}
