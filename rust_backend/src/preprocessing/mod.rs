pub mod merger;
pub mod normalizer;
pub mod pipeline;

pub use merger::merge_inventories;
pub use normalizer::normalize_scenes;
pub use pipeline::{InventoryPipeline, InventoryReport};
