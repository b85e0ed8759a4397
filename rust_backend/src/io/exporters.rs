//! Writers for the inventory artifacts.
//!
//! - per-track timeline CSV (`acquisitions_<orbit>.csv`)
//! - global summary CSV (`inventory_summary.csv`)
//! - per-(track, date) GeoJSON footprints (`<orbit>/<date>.geojson`)
//! - unified inventory GeoJSON

use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::core::domain::{InventorySummary, SceneRecord, SceneTable, TrackTimeline};
use crate::error::{InventoryError, InventoryResult};
use crate::services::partition::group_by_track_and_date;

pub const SUMMARY_FILE_NAME: &str = "inventory_summary.csv";
pub const INVENTORY_FILE_NAME: &str = "query.geojson";

const TIMELINE_HEADER: [&str; 4] = ["sceneDateString", "platform", "nFrames", "dt"];
const SUMMARY_HEADER: [&str; 7] = ["Orbit", "Start", "Stop", "Dates", "Frames", "Direction", "UTC"];

/// File name of the timeline export of one track.
pub fn timeline_file_name(relative_orbit: u32) -> String {
    format!("acquisitions_{}.csv", relative_orbit)
}

/// Write one track timeline as CSV into `dir`, replacing any previous file.
///
/// Columns: `sceneDateString,platform,nFrames,dt`.
pub fn write_track_timeline(timeline: &TrackTimeline, dir: &Path) -> InventoryResult<PathBuf> {
    let path = dir.join(timeline_file_name(timeline.relative_orbit));
    let mut writer = csv::Writer::from_path(&path)?;
    if timeline.entries.is_empty() {
        writer.write_record(TIMELINE_HEADER)?;
    }
    for entry in &timeline.entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;

    log::debug!(
        "Wrote {} timeline rows for track {} to {}",
        timeline.entries.len(),
        timeline.relative_orbit,
        path.display()
    );
    Ok(path)
}

/// Write the global summary as CSV, one row per track.
///
/// Columns: `Orbit,Start,Stop,Dates,Frames,Direction,UTC`.
pub fn write_summary_csv(summary: &InventorySummary, path: &Path) -> InventoryResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    if summary.tracks.is_empty() {
        writer.write_record(SUMMARY_HEADER)?;
    }
    for track in &summary.tracks {
        writer.serialize(track)?;
    }
    writer.flush()?;
    log::info!("Saved inventory summary: {}", path.display());
    Ok(())
}

fn scene_feature(record: &SceneRecord, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(&record.footprint))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn write_collection(features: Vec<Feature>, path: &Path) -> InventoryResult<()> {
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    let writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer(writer, &collection)?;
    Ok(())
}

fn footprint_track_dirs(inventory: &SceneTable, out_dir: &Path) -> Vec<PathBuf> {
    let orbits: BTreeSet<u32> = inventory.iter().map(|r| r.relative_orbit).collect();
    orbits
        .into_iter()
        .map(|orbit| out_dir.join(orbit.to_string()))
        .collect()
}

/// Fail with [`InventoryError::WriteConflict`] if a footprint export of
/// `inventory` into `out_dir` would land in an existing track directory and
/// `overwrite` is not set. Nothing is written.
pub fn check_footprint_targets(
    inventory: &SceneTable,
    out_dir: &Path,
    overwrite: bool,
) -> InventoryResult<()> {
    if overwrite {
        return Ok(());
    }
    match footprint_track_dirs(inventory, out_dir)
        .into_iter()
        .find(|dir| dir.exists())
    {
        Some(dir) => Err(InventoryError::WriteConflict(dir)),
        None => Ok(()),
    }
}

/// Export one GeoJSON file per (track, date) group.
///
/// Each track gets a directory named after its orbit under `out_dir`, holding
/// one `<date>.geojson` per acquisition date with the granule name, download
/// URL and footprint of every frame of that date. Existing track directories
/// are a [`InventoryError::WriteConflict`] unless `overwrite` is set, in which
/// case they are removed first so no stale file survives.
///
/// All conflicts are checked before anything is written. Only directories of
/// tracks present in `inventory` are touched; a track directory left by an
/// earlier run over other tracks stays as it is.
pub fn export_footprints(
    inventory: &SceneTable,
    out_dir: &Path,
    overwrite: bool,
) -> InventoryResult<Vec<PathBuf>> {
    check_footprint_targets(inventory, out_dir, overwrite)?;

    let groups = group_by_track_and_date(inventory);
    let track_dirs = footprint_track_dirs(inventory, out_dir);
    for dir in &track_dirs {
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        fs::create_dir_all(dir)?;
    }

    let mut written = Vec::with_capacity(groups.len());
    for ((orbit, date), indices) in &groups {
        let features = indices
            .iter()
            .map(|&i| {
                let record = &inventory.rows()[i];
                let mut properties = JsonObject::new();
                properties.insert("granuleName".into(), record.granule_name.clone().into());
                properties.insert("downloadUrl".into(), record.download_url.clone().into());
                scene_feature(record, properties)
            })
            .collect();

        let path = out_dir.join(orbit.to_string()).join(format!("{}.geojson", date));
        write_collection(features, &path)?;
        log::debug!("Track {}: wrote {} frames to {}", orbit, indices.len(), path.display());
        written.push(path);
    }

    log::info!(
        "Exported footprints for {} tracks ({} dates) under {}",
        track_dirs.len(),
        written.len(),
        out_dir.display()
    );
    Ok(written)
}

/// Attribute map of a row for the inventory export.
///
/// Everything except the parsed timestamp and calendar date, which carry the
/// same information as `sceneDate` and `sceneDateString`.
fn inventory_properties(record: &SceneRecord) -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("granuleName".into(), record.granule_name.clone().into());
    properties.insert("platform".into(), record.platform.clone().into());
    properties.insert("relativeOrbit".into(), record.relative_orbit.into());
    properties.insert("sceneDate".into(), record.scene_date.clone().into());
    properties.insert(
        "flightDirection".into(),
        record.flight_direction.to_string().into(),
    );
    properties.insert(
        "stringFootprint".into(),
        record.string_footprint.clone().into(),
    );
    properties.insert("downloadUrl".into(), record.download_url.clone().into());
    properties.insert("sceneDateString".into(), record.date_string.clone().into());
    properties.insert("utc".into(), record.utc_time.clone().into());
    properties.insert("orbitCode".into(), Value::from(record.orbit_code));
    for (key, value) in &record.extras {
        properties.insert(key.clone(), value.clone());
    }
    properties
}

/// Save the full inventory as one GeoJSON FeatureCollection.
///
/// Any existing file at `path` is replaced.
pub fn save_inventory(inventory: &SceneTable, path: &Path) -> InventoryResult<()> {
    if path.is_file() {
        fs::remove_file(path)?;
    }

    let features = inventory
        .iter()
        .map(|record| scene_feature(record, inventory_properties(record)))
        .collect();
    write_collection(features, path)?;

    log::info!("Saved inventory: {} ({} scenes)", path.display(), inventory.len());
    Ok(())
}
