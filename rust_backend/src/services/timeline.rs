use std::collections::{HashMap, HashSet};

use crate::core::domain::{SceneRecord, TimelineEntry, TrackTimeline};
use crate::error::{InventoryError, InventoryResult};
use crate::services::partition::TrackPartition;

/// Compute the acquisition timeline of one track.
///
/// Steps, in order:
/// 1. count frames per date string over the whole partition;
/// 2. keep the first row (partition order) of each date string;
/// 3. sort the kept rows by calendar date;
/// 4. `dt[i]` = whole days since the previous kept row, `dt[0] = 0`;
/// 5. attach the frame counts by date string.
///
/// A gap that does not fit in an `i16` fails with
/// [`InventoryError::DeltaRange`] rather than being truncated.
pub fn compute_track_timeline(partition: &TrackPartition<'_>) -> InventoryResult<TrackTimeline> {
    let mut frame_counts: HashMap<&str, usize> = HashMap::new();
    for row in partition.rows() {
        *frame_counts.entry(row.date_string.as_str()).or_insert(0) += 1;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept: Vec<&SceneRecord> = partition
        .rows()
        .iter()
        .copied()
        .filter(|row| seen.insert(row.date_string.as_str()))
        .collect();

    let dropped = partition.len() - kept.len();
    if dropped > 0 {
        log::debug!(
            "Track {}: kept first of each date, dropped {} same-date frames",
            partition.relative_orbit,
            dropped
        );
    }

    kept.sort_by_key(|row| row.date_only);

    let mut entries = Vec::with_capacity(kept.len());
    let mut previous: Option<&SceneRecord> = None;
    for row in kept {
        let dt = match previous {
            None => 0,
            Some(prev) => {
                let days = (row.date_only - prev.date_only).num_days();
                i16::try_from(days).map_err(|_| InventoryError::DeltaRange {
                    orbit: partition.relative_orbit,
                    from: prev.date_string.clone(),
                    to: row.date_string.clone(),
                    days,
                })?
            }
        };

        entries.push(TimelineEntry {
            date_string: row.date_string.clone(),
            date: row.date_only,
            platform: row.platform.clone(),
            frame_count: frame_counts[row.date_string.as_str()],
            dt,
        });
        previous = Some(row);
    }

    Ok(TrackTimeline {
        relative_orbit: partition.relative_orbit,
        entries,
    })
}
