//! Aggregations over a unified inventory.
//!
//! - [`partition`]: grouping by track, and by (track, date)
//! - [`timeline`]: per-track deduplicated acquisition timeline
//! - [`summary`]: cross-track report and volume estimate

pub mod partition;
pub mod summary;
pub mod timeline;

pub use partition::{group_by_track_and_date, partition_by_track, TrackPartition};
pub use summary::{summarize_inventory, DEFAULT_FRAME_SIZE_GB};
pub use timeline::compute_track_timeline;
