//! Loading of archive results and writing of inventory artifacts.

pub mod display;
pub mod exporters;
pub mod loaders;

#[cfg(test)]
mod exporters_tests;
#[cfg(test)]
mod loaders_tests;

pub use exporters::{
    check_footprint_targets, export_footprints, save_inventory, write_summary_csv,
    write_track_timeline,
};
pub use loaders::InventoryLoader;
