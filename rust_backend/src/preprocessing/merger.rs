//! Row-wise concatenation of normalized tables.
//!
//! Archive queries run once per platform, so a full inventory is assembled
//! from several normalized tables. Sources are appended in call order and
//! rows are never merged or dropped: the same granule returned by two
//! queries appears twice.

use std::collections::BTreeSet;

use crate::core::domain::SceneTable;
use crate::error::{InventoryError, InventoryResult, SchemaMismatchKind};

/// Check that `other` has exactly the columns of `reference`.
fn check_schema(reference: &SceneTable, other: &SceneTable, table: usize) -> InventoryResult<()> {
    let expected: BTreeSet<&String> = reference.schema().iter().collect();
    let found: BTreeSet<&String> = other.schema().iter().collect();

    if let Some(field) = expected.difference(&found).next() {
        return Err(InventoryError::SchemaMismatch {
            field: field.to_string(),
            kind: SchemaMismatchKind::Missing,
            table,
        });
    }
    if let Some(field) = found.difference(&expected).next() {
        return Err(InventoryError::SchemaMismatch {
            field: field.to_string(),
            kind: SchemaMismatchKind::Extra,
            table,
        });
    }
    Ok(())
}

/// Concatenate tables into one inventory with a fresh contiguous index.
///
/// Every table must share the schema of the first one. An empty slice yields
/// an empty inventory.
pub fn merge_inventories(tables: &[SceneTable]) -> InventoryResult<SceneTable> {
    let Some(first) = tables.first() else {
        return Ok(SceneTable::new(
            SceneTable::schema_for(std::iter::empty::<&String>()),
            Vec::new(),
        ));
    };

    for (idx, table) in tables.iter().enumerate().skip(1) {
        check_schema(first, table, idx)?;
    }

    let rows: Vec<_> = tables.iter().flat_map(|t| t.rows().iter().cloned()).collect();
    log::info!(
        "Merged {} inventories into {} rows",
        tables.len(),
        rows.len()
    );

    Ok(SceneTable::new(first.schema().to_vec(), rows))
}
