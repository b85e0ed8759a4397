//! Scene inventory command-line tool
//!
//! Reads one or more archive search result files (typically one per
//! platform), merges them and writes the per-track timelines, the global
//! summary, per-date footprints and the unified inventory.
//!
//! # Usage
//!
//! ```bash
//! get-inventory query_S1A.json query_S1B.json --output-dir inventory --footprints
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use scene_inventory::core::Snwe;
use scene_inventory::{InventoryConfig, InventoryPipeline};

#[derive(Parser)]
#[command(
    name = "get-inventory",
    about = "Summarize satellite archive search results per orbit track"
)]
struct Cli {
    /// Archive search result files (JSON), merged in the given order
    #[arg(required = true)]
    sources: Vec<PathBuf>,

    /// TOML configuration file (default: inventory.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving every artifact
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Replace existing footprint exports
    #[arg(long)]
    overwrite: bool,

    /// Size of one frame in GB for the archive volume estimate
    #[arg(long)]
    frame_size_gb: Option<f64>,

    /// Reject records with fields beyond the core scene fields
    #[arg(long)]
    strict: bool,

    /// Export one GeoJSON file per track and date
    #[arg(long)]
    footprints: bool,

    /// Record the query bounds (south north west east) next to the outputs
    #[arg(long, num_args = 4, value_names = ["S", "N", "W", "E"], allow_negative_numbers = true)]
    snwe: Option<Vec<f64>>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<InventoryConfig> {
        let mut config = match &self.config {
            Some(path) => InventoryConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => InventoryConfig::from_default_location()?,
        };

        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if self.overwrite {
            config.output.overwrite = true;
        }
        if let Some(size) = self.frame_size_gb {
            config.summary.frame_size_gb = size;
        }
        if self.strict {
            config.normalize.strict_fields = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Some(values) = &cli.snwe {
        let snwe = Snwe::from_slice(values)?;
        snwe.write_files(&config.output.dir)
            .context("Failed to record query bounds")?;
    }

    info!("Merging {} archive result files", cli.sources.len());
    let pipeline = InventoryPipeline::with_config(config).with_footprints(cli.footprints);
    let report = pipeline
        .process(&cli.sources)
        .context("Inventory aggregation failed")?;

    println!("{}", report.summary);
    info!(
        "Processed {} scenes into {} tracks",
        report.inventory_rows,
        report.timelines.len()
    );

    Ok(())
}
