//! High-level loading of archive result files into inventories.
//!
//! Loaders combine decoding, normalization and merging so callers go from
//! file paths straight to a [`SceneTable`].
//!
//! # Example
//!
//! ```no_run
//! use scene_inventory::io::loaders::InventoryLoader;
//! use std::path::Path;
//!
//! let inventory = InventoryLoader::new()
//!     .load_and_merge(&[Path::new("query_S1A.json"), Path::new("query_S1B.json")])
//!     .expect("Failed to load");
//! println!("Loaded {} scenes", inventory.len());
//! ```

use std::path::Path;

use crate::core::domain::SceneTable;
use crate::error::InventoryResult;
use crate::parsing::json_parser;
use crate::preprocessing::{merger, normalizer};

/// Loads and normalizes archive result documents
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryLoader {
    strict_fields: bool,
}

impl InventoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject records carrying keys beyond the core scene fields
    pub fn strict(mut self, strict_fields: bool) -> Self {
        self.strict_fields = strict_fields;
        self
    }

    /// Load and normalize one archive result file
    pub fn load_from_file(&self, path: &Path) -> InventoryResult<SceneTable> {
        log::info!("Loading archive result {}", path.display());
        let scenes = json_parser::parse_archive_json(path, self.strict_fields)?;
        normalizer::normalize_scenes(scenes)
    }

    /// Load and normalize one archive result from a JSON string
    pub fn load_from_str(&self, json_str: &str) -> InventoryResult<SceneTable> {
        let scenes = json_parser::parse_archive_json_str(json_str, self.strict_fields)?;
        normalizer::normalize_scenes(scenes)
    }

    /// Load every file separately, then merge them in the given order
    pub fn load_and_merge<P: AsRef<Path>>(&self, paths: &[P]) -> InventoryResult<SceneTable> {
        let tables = paths
            .iter()
            .map(|p| self.load_from_file(p.as_ref()))
            .collect::<InventoryResult<Vec<_>>>()?;
        merger::merge_inventories(&tables)
    }
}
