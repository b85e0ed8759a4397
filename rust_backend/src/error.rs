//! Error types for inventory aggregation.
//!
//! Every failure raised by the aggregation steps is a variant of
//! [`InventoryError`]. Nothing is retried or skipped internally; the first
//! failing record or file ends the run.

use std::path::PathBuf;

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Error type for inventory operations
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Invalid footprint for granule {granule}: {reason}")]
    GeometryParse { granule: String, reason: String },

    #[error("Invalid sceneDate '{value}' for granule {granule} (expected YYYY-MM-DD HH:MM:SS)")]
    TimestampParse { granule: String, value: String },

    #[error("Schema mismatch: field '{field}' is {kind} in input table {table}")]
    SchemaMismatch {
        field: String,
        kind: SchemaMismatchKind,
        table: usize,
    },

    #[error("Gap of {days} days between {from} and {to} on track {orbit} does not fit in i16")]
    DeltaRange {
        orbit: u32,
        from: String,
        to: String,
        days: i64,
    },

    #[error("Export target already exists: {}", .0.display())]
    WriteConflict(PathBuf),

    #[error("Record {index} could not be decoded at '{path}': {message}")]
    RecordDecode {
        index: usize,
        path: String,
        message: String,
    },

    #[error("Record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },

    #[error("Record {index} has unexpected field '{field}'")]
    UnexpectedField { index: usize, field: String },

    #[error("Invalid archive document: {0}")]
    InvalidDocument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unable to perform file operation: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Which side of a merge carries a field the other side lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMismatchKind {
    /// Present in the first table, absent here
    Missing,
    /// Absent from the first table, present here
    Extra,
}

impl std::fmt::Display for SchemaMismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaMismatchKind::Missing => write!(f, "missing"),
            SchemaMismatchKind::Extra => write!(f, "extra"),
        }
    }
}
