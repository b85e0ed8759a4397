//! Scene inventory aggregation for satellite archive search results.
//!
//! Archive queries return one JSON document per platform. This crate turns
//! those documents into one normalized inventory and derives, per relative
//! orbit (track), the acquisition timeline and summary statistics, plus
//! GeoJSON footprints for visualization.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod services;

pub use config::InventoryConfig;
pub use error::{InventoryError, InventoryResult};
pub use preprocessing::{InventoryPipeline, InventoryReport};
