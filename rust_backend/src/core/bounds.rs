//! South/North/West/East query bounds.
//!
//! The archive query and the extraction of bounds from vector files live
//! outside this crate; what is kept here is the bounds value itself and the
//! record of it written next to an inventory run.

use geo_types::{Polygon, Rect};
use std::fs;
use std::path::Path;
use wkt::ToWkt;

use crate::error::{InventoryError, InventoryResult};

/// Bounding box in decimal degrees, ordered `[south, north, west, east]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snwe {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Snwe {
    pub fn new(south: f64, north: f64, west: f64, east: f64) -> InventoryResult<Self> {
        if !(south <= north) {
            return Err(InventoryError::Configuration(format!(
                "south bound {} is above north bound {}",
                south, north
            )));
        }
        if !(west <= east) {
            return Err(InventoryError::Configuration(format!(
                "west bound {} is east of east bound {}",
                west, east
            )));
        }
        Ok(Self {
            south,
            north,
            west,
            east,
        })
    }

    /// Build from a `[S, N, W, E]` slice, as passed on the command line.
    pub fn from_slice(values: &[f64]) -> InventoryResult<Self> {
        match values {
            [s, n, w, e] => Self::new(*s, *n, *w, *e),
            _ => Err(InventoryError::Configuration(format!(
                "expected 4 bounds [S, N, W, E], got {}",
                values.len()
            ))),
        }
    }

    /// Closed rectangular polygon covering the bounds.
    pub fn to_polygon(&self) -> Polygon<f64> {
        Rect::new((self.west, self.south), (self.east, self.north)).to_polygon()
    }

    pub fn to_wkt_string(&self) -> String {
        self.to_polygon().wkt_string()
    }

    pub fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::from(&self.to_polygon()))
    }

    /// Record the bounds as `snwe.json`, `snwe.wkt` and `snwe.txt` in `dir`.
    pub fn write_files(&self, dir: &Path) -> InventoryResult<()> {
        fs::create_dir_all(dir)?;
        fs::write(dir.join("snwe.json"), serde_json::to_string(&self.to_geojson())?)?;
        fs::write(dir.join("snwe.wkt"), self.to_wkt_string())?;
        fs::write(dir.join("snwe.txt"), self.to_string())?;
        log::info!("Saved query bounds {} to {}", self, dir.display());
        Ok(())
    }
}

impl std::fmt::Display for Snwe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}, {:.3}, {:.3}]",
            self.south, self.north, self.west, self.east
        )
    }
}
