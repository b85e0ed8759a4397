use std::fs;
use std::path::{Path, PathBuf};

use crate::config::InventoryConfig;
use crate::core::domain::{InventorySummary, SceneTable, TrackTimeline};
use crate::error::InventoryResult;
use crate::io::exporters::{self, INVENTORY_FILE_NAME, SUMMARY_FILE_NAME};
use crate::io::loaders::InventoryLoader;
use crate::services::{compute_track_timeline, partition_by_track, summarize_inventory};

/// Result of one aggregation run
#[derive(Debug)]
pub struct InventoryReport {
    pub inventory_rows: usize,
    pub timelines: Vec<TrackTimeline>,
    pub summary: InventorySummary,
    pub timeline_files: Vec<PathBuf>,
    pub summary_file: PathBuf,
    pub footprint_files: Vec<PathBuf>,
    pub inventory_file: PathBuf,
}

/// Main aggregation pipeline
///
/// Runs load → normalize → merge → per-track timelines → global summary →
/// footprints → unified inventory, writing every artifact under the
/// configured output directory.
///
/// Footprint targets are checked before any artifact is written, so a refused
/// export leaves the previous run's files untouched. Tracks are written one
/// at a time. A failure on one track aborts the run before that track's file
/// is written, but files of tracks already written are left in place;
/// re-running with the same input is idempotent.
pub struct InventoryPipeline {
    config: InventoryConfig,
    export_footprints: bool,
}

impl InventoryPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self::with_config(InventoryConfig::default())
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            config,
            export_footprints: true,
        }
    }

    /// Enable or disable the per-date footprint export
    pub fn with_footprints(mut self, enabled: bool) -> Self {
        self.export_footprints = enabled;
        self
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Process archive result files, merged in the given order
    pub fn process<P: AsRef<Path>>(&self, sources: &[P]) -> InventoryResult<InventoryReport> {
        let inventory = InventoryLoader::new()
            .strict(self.config.normalize.strict_fields)
            .load_and_merge(sources)?;

        self.process_inventory(&inventory)
    }

    /// Run every aggregation step on an already merged inventory
    pub fn process_inventory(&self, inventory: &SceneTable) -> InventoryResult<InventoryReport> {
        let out_dir = &self.config.output.dir;
        if self.export_footprints {
            exporters::check_footprint_targets(inventory, out_dir, self.config.output.overwrite)?;
        }
        fs::create_dir_all(out_dir)?;

        // Step 1: per-track timelines
        let mut timelines = Vec::new();
        let mut timeline_files = Vec::new();
        for partition in partition_by_track(inventory).values() {
            let timeline = compute_track_timeline(partition)?;
            timeline_files.push(exporters::write_track_timeline(&timeline, out_dir)?);
            timelines.push(timeline);
        }
        log::info!("Wrote {} track timelines", timelines.len());

        // Step 2: global summary
        let summary = summarize_inventory(inventory, self.config.summary.frame_size_gb);
        let summary_file = out_dir.join(SUMMARY_FILE_NAME);
        exporters::write_summary_csv(&summary, &summary_file)?;

        // Step 3: footprints per track and date
        let footprint_files = if self.export_footprints {
            exporters::export_footprints(inventory, out_dir, self.config.output.overwrite)?
        } else {
            Vec::new()
        };

        // Step 4: unified inventory
        let inventory_file = out_dir.join(INVENTORY_FILE_NAME);
        exporters::save_inventory(inventory, &inventory_file)?;

        Ok(InventoryReport {
            inventory_rows: inventory.len(),
            timelines,
            summary,
            timeline_files,
            summary_file,
            footprint_files,
            inventory_file,
        })
    }
}

impl Default for InventoryPipeline {
    fn default() -> Self {
        Self::new()
    }
}
