//! Grouping of a unified inventory by relative orbit and acquisition date.
//!
//! Groups borrow rows from the inventory and remember each row's inventory
//! index; nothing is copied or modified.

use std::collections::BTreeMap;

use crate::core::domain::{SceneRecord, SceneTable};

/// Rows of one relative orbit, in inventory order.
#[derive(Debug, Clone)]
pub struct TrackPartition<'a> {
    pub relative_orbit: u32,
    indices: Vec<usize>,
    rows: Vec<&'a SceneRecord>,
}

impl<'a> TrackPartition<'a> {
    fn new(relative_orbit: u32) -> Self {
        Self {
            relative_orbit,
            indices: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, index: usize, row: &'a SceneRecord) {
        self.indices.push(index);
        self.rows.push(row);
    }

    /// Inventory row indices of this track.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn rows(&self) -> &[&'a SceneRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Partition an inventory by `relativeOrbit`.
///
/// Partitions are disjoint and together cover every row. An empty inventory
/// yields an empty map.
pub fn partition_by_track(inventory: &SceneTable) -> BTreeMap<u32, TrackPartition<'_>> {
    let mut partitions: BTreeMap<u32, TrackPartition<'_>> = BTreeMap::new();

    for (index, row) in inventory.iter().enumerate() {
        partitions
            .entry(row.relative_orbit)
            .or_insert_with(|| TrackPartition::new(row.relative_orbit))
            .push(index, row);
    }

    log::debug!(
        "Partitioned {} rows into {} tracks",
        inventory.len(),
        partitions.len()
    );
    partitions
}

/// Group an inventory by `(relativeOrbit, sceneDateString)`.
///
/// This is the single grouping key used for footprint export: each date of
/// each track maps to the inventory indices of its frames, in inventory order.
pub fn group_by_track_and_date(inventory: &SceneTable) -> BTreeMap<(u32, String), Vec<usize>> {
    let mut groups: BTreeMap<(u32, String), Vec<usize>> = BTreeMap::new();

    for (index, row) in inventory.iter().enumerate() {
        groups
            .entry((row.relative_orbit, row.date_string.clone()))
            .or_default()
            .push(index);
    }
    groups
}
