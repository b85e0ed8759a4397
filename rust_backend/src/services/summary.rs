//! Cross-track statistics of a unified inventory.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::domain::{InventorySummary, SceneRecord, SceneTable, TrackSummary};

/// Default size of one frame in gigabytes, used for the volume estimate.
pub const DEFAULT_FRAME_SIZE_GB: f64 = 5.0;

struct TrackAccumulator<'a> {
    first: &'a SceneRecord,
    start: &'a str,
    stop: &'a str,
    dates: BTreeSet<&'a str>,
    frames: usize,
}

impl<'a> TrackAccumulator<'a> {
    fn new(first: &'a SceneRecord) -> Self {
        Self {
            first,
            start: &first.date_string,
            stop: &first.date_string,
            dates: BTreeSet::new(),
            frames: 0,
        }
    }

    fn add(&mut self, row: &'a SceneRecord) {
        let date = row.date_string.as_str();
        self.start = self.start.min(date);
        self.stop = self.stop.max(date);
        self.dates.insert(date);
        self.frames += 1;

        if row.flight_direction != self.first.flight_direction {
            log::warn!(
                "Track {}: granule {} is {} but the track started {}",
                row.relative_orbit,
                row.granule_name,
                row.flight_direction,
                self.first.flight_direction
            );
        }
    }

    fn finish(self) -> TrackSummary {
        TrackSummary {
            relative_orbit: self.first.relative_orbit,
            start: self.start.to_string(),
            stop: self.stop.to_string(),
            dates: self.dates.len(),
            frames: self.frames,
            direction: self.first.flight_direction,
            utc: self.first.utc_time.clone(),
        }
    }
}

/// Summarize every track of the inventory.
///
/// Start/stop are the lexicographic min/max of the date strings, which is
/// chronological for fixed-width ISO dates. Direction and UTC time are taken
/// from the first row of the track. Tracks are sorted by orbit descending.
pub fn summarize_inventory(inventory: &SceneTable, frame_size_gb: f64) -> InventorySummary {
    let mut tracks: BTreeMap<u32, TrackAccumulator<'_>> = BTreeMap::new();

    for row in inventory.iter() {
        tracks
            .entry(row.relative_orbit)
            .or_insert_with(|| TrackAccumulator::new(row))
            .add(row);
    }

    let summary = InventorySummary {
        tracks: tracks.into_values().rev().map(TrackAccumulator::finish).collect(),
        frame_size_gb,
    };

    log::info!(
        "Summarized {} tracks, {} frames, approximate size {} TB",
        summary.tracks.len(),
        summary.total_frames(),
        summary.approximate_size_tb()
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::FlightDirection;
    use crate::test_support::inventory;

    #[test]
    fn test_summary_fields_and_order() {
        let table = inventory(&[
            (64, "2018-01-13 14:19:06"),
            (100, "2018-02-01 02:00:00"),
            (64, "2018-01-01 14:19:31"),
            (64, "2018-01-01 14:19:06"),
            (100, "2018-02-13 02:00:00"),
        ]);

        let summary = summarize_inventory(&table, DEFAULT_FRAME_SIZE_GB);
        assert_eq!(summary.tracks.len(), 2);

        let t100 = &summary.tracks[0];
        assert_eq!(t100.relative_orbit, 100);
        assert_eq!(t100.start, "2018-02-01");
        assert_eq!(t100.stop, "2018-02-13");
        assert_eq!(t100.dates, 2);
        assert_eq!(t100.frames, 2);

        let t64 = &summary.tracks[1];
        assert_eq!(t64.relative_orbit, 64);
        assert_eq!(t64.start, "2018-01-01");
        assert_eq!(t64.stop, "2018-01-13");
        assert_eq!(t64.dates, 2);
        assert_eq!(t64.frames, 3);
        assert_eq!(t64.utc, "14:19:06");
        assert_eq!(t64.direction, FlightDirection::Ascending);
    }

    #[test]
    fn test_utc_is_first_observed() {
        let table = inventory(&[(64, "2018-01-13 14:19:31"), (64, "2018-01-01 14:19:06")]);
        let summary = summarize_inventory(&table, DEFAULT_FRAME_SIZE_GB);
        assert_eq!(summary.tracks[0].utc, "14:19:31");
    }

    #[test]
    fn test_frame_size_is_configurable() {
        let table = inventory(&[(64, "2018-01-01 00:00:00"), (64, "2018-01-02 00:00:00")]);
        let summary = summarize_inventory(&table, 7.5);
        assert!((summary.approximate_size_tb() - 0.015).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inventory() {
        let summary = summarize_inventory(&inventory(&[]), DEFAULT_FRAME_SIZE_GB);
        assert!(summary.tracks.is_empty());
        assert_eq!(summary.approximate_size_tb(), 0.0);
    }
}
