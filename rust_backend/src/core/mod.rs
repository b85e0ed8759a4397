//! Core domain types shared by every aggregation stage.

pub mod bounds;
pub mod domain;

pub use bounds::Snwe;
pub use domain::{
    FlightDirection, InventorySummary, RawScene, SceneRecord, SceneTable, TimelineEntry,
    TrackSummary, TrackTimeline,
};
