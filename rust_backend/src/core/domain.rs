//! Domain models for archive scenes, normalized inventories and per-track summaries.
//!
//! A scene is one acquisition frame returned by the archive search. After
//! normalization each scene carries its derived temporal fields and parsed
//! footprint; a [`SceneTable`] holds an ordered, immutable set of such rows.
//! Timelines and summaries are derived from tables and never feed back into them.

use chrono::{NaiveDate, NaiveDateTime};
use geo_types::Polygon;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Fields every archive record must provide, in archive naming.
pub const CORE_COLUMNS: [&str; 7] = [
    "granuleName",
    "platform",
    "relativeOrbit",
    "sceneDate",
    "flightDirection",
    "stringFootprint",
    "downloadUrl",
];

/// Fields added by normalization.
pub const DERIVED_COLUMNS: [&str; 5] = [
    "timeStamp",
    "sceneDateString",
    "dateStamp",
    "utc",
    "orbitCode",
];

/// Source timestamp format of `sceneDate`.
pub const SCENE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Orbit direction of the platform at acquisition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightDirection {
    Ascending,
    Descending,
}

impl fmt::Display for FlightDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightDirection::Ascending => write!(f, "ASCENDING"),
            FlightDirection::Descending => write!(f, "DESCENDING"),
        }
    }
}

impl FromStr for FlightDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASCENDING" | "A" => Ok(FlightDirection::Ascending),
            "DESCENDING" | "D" => Ok(FlightDirection::Descending),
            other => Err(format!("unknown flight direction '{}'", other)),
        }
    }
}

/// One acquisition frame exactly as the archive describes it.
///
/// Produced by the raw document decoder; fields are typed but nothing is
/// derived yet. Keys outside [`CORE_COLUMNS`] are kept in `extras`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScene {
    pub granule_name: String,
    pub platform: String,
    pub relative_orbit: u32,
    pub scene_date: String,
    pub flight_direction: FlightDirection,
    pub string_footprint: String,
    pub download_url: String,
    pub extras: BTreeMap<String, serde_json::Value>,
}

/// A normalized scene: the raw fields plus parsed footprint and derived time fields.
///
/// # Fields
///
/// * `timestamp` - Parsed acquisition instant (timezone-naive, 1 s precision)
/// * `date_string` - Calendar date as `YYYY-MM-DD`
/// * `date_only` - Calendar date, orderable
/// * `utc_time` - Time of day as `HH:MM:SS`
/// * `orbit_code` - Dense code of `relative_orbit` within one normalization call
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRecord {
    pub granule_name: String,
    pub platform: String,
    pub relative_orbit: u32,
    pub scene_date: String,
    pub flight_direction: FlightDirection,
    pub string_footprint: String,
    pub download_url: String,
    pub footprint: Polygon<f64>,
    pub timestamp: NaiveDateTime,
    pub date_string: String,
    pub date_only: NaiveDate,
    pub utc_time: String,
    pub orbit_code: u32,
    pub extras: BTreeMap<String, serde_json::Value>,
}

/// An ordered, immutable table of normalized scenes.
///
/// The row index is the position in [`SceneTable::rows`], so it is always the
/// contiguous range `0..len`. The schema lists the column names every row
/// provides: core columns, derived columns, then extra attribute names sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTable {
    schema: Vec<String>,
    rows: Vec<SceneRecord>,
}

impl SceneTable {
    pub(crate) fn new(schema: Vec<String>, rows: Vec<SceneRecord>) -> Self {
        Self { schema, rows }
    }

    /// Build the schema for rows carrying the given extra attribute names.
    pub fn schema_for<'a, I>(extra_keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut extras: Vec<String> = extra_keys.into_iter().cloned().collect();
        extras.sort();
        extras.dedup();

        CORE_COLUMNS
            .iter()
            .chain(DERIVED_COLUMNS.iter())
            .map(|c| c.to_string())
            .chain(extras)
            .collect()
    }

    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    pub fn rows(&self) -> &[SceneRecord] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&SceneRecord> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneRecord> {
        self.rows.iter()
    }

    /// Names of the extra (non-core, non-derived) columns.
    pub fn extra_columns(&self) -> &[String] {
        &self.schema[CORE_COLUMNS.len() + DERIVED_COLUMNS.len()..]
    }
}

/// One distinct acquisition date within a track.
///
/// `dt` is the whole-day gap to the previous entry of the sorted timeline and
/// is `0` for the first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    #[serde(rename = "sceneDateString")]
    pub date_string: String,
    #[serde(skip)]
    pub date: NaiveDate,
    pub platform: String,
    #[serde(rename = "nFrames")]
    pub frame_count: usize,
    pub dt: i16,
}

/// Acquisition timeline of one relative orbit, strictly increasing by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTimeline {
    pub relative_orbit: u32,
    pub entries: Vec<TimelineEntry>,
}

impl TrackTimeline {
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.date)
    }

    /// Total frames over every date of the track.
    pub fn total_frames(&self) -> usize {
        self.entries.iter().map(|e| e.frame_count).sum()
    }
}

/// Per-track row of the global inventory report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackSummary {
    #[serde(rename = "Orbit")]
    pub relative_orbit: u32,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "Stop")]
    pub stop: String,
    #[serde(rename = "Dates")]
    pub dates: usize,
    #[serde(rename = "Frames")]
    pub frames: usize,
    #[serde(rename = "Direction")]
    pub direction: FlightDirection,
    #[serde(rename = "UTC")]
    pub utc: String,
}

/// Cross-track report, tracks sorted by relative orbit descending.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub tracks: Vec<TrackSummary>,
    pub frame_size_gb: f64,
}

impl InventorySummary {
    pub fn total_frames(&self) -> usize {
        self.tracks.iter().map(|t| t.frames).sum()
    }

    /// Estimated archive volume in terabytes (frames × per-frame size).
    ///
    /// This is an estimate from a fixed per-frame size, not a measured size.
    pub fn approximate_size_tb(&self) -> f64 {
        self.total_frames() as f64 * self.frame_size_gb / 1e3
    }
}
