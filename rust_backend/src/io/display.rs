//! Console rendering of the inventory summary.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use std::fmt;

use crate::core::domain::InventorySummary;

/// Build the per-track summary table printed to the operator console.
pub fn summary_table(summary: &InventorySummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        "Orbit", "Start", "Stop", "Dates", "Frames", "Direction", "UTC",
    ]);

    for track in &summary.tracks {
        table.add_row(Row::from(vec![
            Cell::new(track.relative_orbit).set_alignment(CellAlignment::Right),
            Cell::new(&track.start),
            Cell::new(&track.stop),
            Cell::new(track.dates).set_alignment(CellAlignment::Right),
            Cell::new(track.frames).set_alignment(CellAlignment::Right),
            Cell::new(track.direction),
            Cell::new(&track.utc),
        ]));
    }
    table
}

impl fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", summary_table(self))?;
        write!(
            f,
            "Approximate Archive size = {} TB",
            self.approximate_size_tb()
        )
    }
}
