//! Inventory run configuration file support.
//!
//! This module reads run settings from a TOML file. Every section is
//! optional; missing values fall back to their defaults.
//!
//! ```toml
//! [output]
//! dir = "inventory"
//! overwrite = false
//!
//! [summary]
//! frame_size_gb = 5.0
//!
//! [normalize]
//! strict_fields = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InventoryError, InventoryResult};
use crate::services::summary::DEFAULT_FRAME_SIZE_GB;

/// Inventory run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub summary: SummarySettings,
    #[serde(default)]
    pub normalize: NormalizeSettings,
}

/// Where artifacts go and whether existing exports may be replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub overwrite: bool,
}

/// Global summary settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySettings {
    #[serde(default = "default_frame_size_gb")]
    pub frame_size_gb: f64,
}

/// Raw record handling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizeSettings {
    #[serde(default)]
    pub strict_fields: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_frame_size_gb() -> f64 {
    DEFAULT_FRAME_SIZE_GB
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            overwrite: false,
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            frame_size_gb: default_frame_size_gb(),
        }
    }
}

impl InventoryConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(InventoryConfig)` if the file was read, parsed and validated
    /// * `Err(InventoryError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> InventoryResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            InventoryError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> InventoryResult<Self> {
        let config: InventoryConfig = toml::from_str(content).map_err(|e| {
            InventoryError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `inventory.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// Returns the defaults when no file is found.
    pub fn from_default_location() -> InventoryResult<Self> {
        let search_paths = [
            PathBuf::from("inventory.toml"),
            PathBuf::from("rust_backend/inventory.toml"),
            PathBuf::from("../inventory.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No inventory.toml found, using defaults");
        Ok(Self::default())
    }

    /// Check values that would make the run meaningless.
    pub fn validate(&self) -> InventoryResult<()> {
        let size = self.summary.frame_size_gb;
        if !size.is_finite() || size < 0.0 {
            return Err(InventoryError::Configuration(format!(
                "summary.frame_size_gb must be a non-negative number, got {}",
                size
            )));
        }
        Ok(())
    }
}
