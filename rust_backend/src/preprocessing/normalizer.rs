//! Conversion of raw archive scenes into a normalized [`SceneTable`].
//!
//! For each scene the WKT footprint is parsed into a polygon and the
//! acquisition time is parsed once; the calendar date, date string and
//! time-of-day are derived from that single parsed instant.
//!
//! `orbitCode` enumeration policy: the distinct `relativeOrbit` values of one
//! call are sorted ascending and numbered densely from 0. Codes are only
//! comparable within the table produced by that call.

use chrono::NaiveDateTime;
use geo_types::Polygon;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use wkt::TryFromWkt;

use crate::core::domain::{RawScene, SceneRecord, SceneTable, SCENE_DATE_FORMAT};
use crate::error::{InventoryError, InventoryResult};

/// Dense code for each distinct relative orbit, in ascending orbit order.
pub fn orbit_codes(scenes: &[RawScene]) -> BTreeMap<u32, u32> {
    scenes
        .iter()
        .map(|s| s.relative_orbit)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .zip(0u32..)
        .collect()
}

/// Parse a `sceneDate` value (`YYYY-MM-DD HH:MM:SS`).
pub fn parse_scene_date(granule: &str, value: &str) -> InventoryResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, SCENE_DATE_FORMAT).map_err(|_| {
        InventoryError::TimestampParse {
            granule: granule.to_string(),
            value: value.to_string(),
        }
    })
}

/// Parse a WKT footprint into a polygon.
pub fn parse_footprint(granule: &str, wkt_str: &str) -> InventoryResult<Polygon<f64>> {
    Polygon::<f64>::try_from_wkt_str(wkt_str).map_err(|e| InventoryError::GeometryParse {
        granule: granule.to_string(),
        reason: e.to_string(),
    })
}

/// Normalize one archive result set.
///
/// Rows keep the input order and count. Extra attributes absent from a
/// given record are filled with `null` so every row covers the table schema.
pub fn normalize_scenes(scenes: Vec<RawScene>) -> InventoryResult<SceneTable> {
    let codes = orbit_codes(&scenes);
    let extra_keys: BTreeSet<String> = scenes
        .iter()
        .flat_map(|s| s.extras.keys().cloned())
        .collect();

    let mut rows = Vec::with_capacity(scenes.len());
    for scene in scenes {
        let footprint = parse_footprint(&scene.granule_name, &scene.string_footprint)?;
        let timestamp = parse_scene_date(&scene.granule_name, &scene.scene_date)?;

        let mut extras = scene.extras;
        for key in &extra_keys {
            extras.entry(key.clone()).or_insert(Value::Null);
        }

        rows.push(SceneRecord {
            orbit_code: codes[&scene.relative_orbit],
            date_string: timestamp.format("%Y-%m-%d").to_string(),
            date_only: timestamp.date(),
            utc_time: timestamp.format("%H:%M:%S").to_string(),
            timestamp,
            footprint,
            granule_name: scene.granule_name,
            platform: scene.platform,
            relative_orbit: scene.relative_orbit,
            scene_date: scene.scene_date,
            flight_direction: scene.flight_direction,
            string_footprint: scene.string_footprint,
            download_url: scene.download_url,
            extras,
        });
    }

    log::info!(
        "Normalized {} scenes across {} tracks",
        rows.len(),
        codes.len()
    );

    Ok(SceneTable::new(SceneTable::schema_for(&extra_keys), rows))
}
