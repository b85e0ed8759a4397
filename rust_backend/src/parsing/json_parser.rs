use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::domain::{FlightDirection, RawScene, CORE_COLUMNS};
use crate::error::{InventoryError, InventoryResult};

/// Custom deserializer that accepts either string or integer for the relative orbit
fn deserialize_relative_orbit<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(u64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s.trim().parse::<u32>().map_err(D::Error::custom),
        StringOrInt::Int(i) => u32::try_from(i).map_err(D::Error::custom),
    }
}

fn deserialize_flight_direction<'de, D>(deserializer: D) -> Result<FlightDirection, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    s.parse::<FlightDirection>().map_err(D::Error::custom)
}

/// Raw JSON structure of one archive search result
#[derive(Debug, Deserialize)]
struct RawSceneRecord {
    #[serde(rename = "granuleName")]
    granule_name: String,
    platform: String,
    #[serde(rename = "relativeOrbit", deserialize_with = "deserialize_relative_orbit")]
    relative_orbit: u32,
    #[serde(rename = "sceneDate")]
    scene_date: String,
    #[serde(rename = "flightDirection", deserialize_with = "deserialize_flight_direction")]
    flight_direction: FlightDirection,
    #[serde(rename = "stringFootprint")]
    string_footprint: String,
    #[serde(rename = "downloadUrl")]
    download_url: String,
    #[serde(flatten)]
    extras: BTreeMap<String, Value>,
}

impl From<RawSceneRecord> for RawScene {
    fn from(raw: RawSceneRecord) -> Self {
        RawScene {
            granule_name: raw.granule_name,
            platform: raw.platform,
            relative_orbit: raw.relative_orbit,
            scene_date: raw.scene_date,
            flight_direction: raw.flight_direction,
            string_footprint: raw.string_footprint,
            download_url: raw.download_url,
            extras: raw.extras,
        }
    }
}

/// Parse an archive search result file into raw scenes
pub fn parse_archive_json(json_path: &Path, strict_fields: bool) -> InventoryResult<Vec<RawScene>> {
    let json_content = std::fs::read_to_string(json_path)?;
    log::debug!("Read {} bytes from {}", json_content.len(), json_path.display());

    parse_archive_json_str(&json_content, strict_fields)
}

/// Parse an archive search result from a string.
///
/// The archive wraps its result list in an outer list (`[[{...}, ...]]`); a
/// flat list of records is accepted as well. With `strict_fields`, any key
/// outside the core scene fields is rejected instead of being carried along
/// as an extra attribute.
pub fn parse_archive_json_str(json_str: &str, strict_fields: bool) -> InventoryResult<Vec<RawScene>> {
    let document: Value = serde_json::from_str(json_str)?;
    let records = unwrap_result_list(document)?;

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| decode_record(idx, record, strict_fields))
        .collect()
}

fn unwrap_result_list(document: Value) -> InventoryResult<Vec<Value>> {
    let Value::Array(outer) = document else {
        return Err(InventoryError::InvalidDocument(
            "expected a JSON array of scene records".to_string(),
        ));
    };

    match outer.first() {
        None | Some(Value::Object(_)) => Ok(outer),
        Some(Value::Array(_)) => match outer.into_iter().next() {
            Some(Value::Array(inner)) => Ok(inner),
            _ => Ok(Vec::new()),
        },
        Some(other) => Err(InventoryError::InvalidDocument(format!(
            "unexpected result entry: {}",
            other
        ))),
    }
}

fn decode_record(index: usize, record: Value, strict_fields: bool) -> InventoryResult<RawScene> {
    let Value::Object(fields) = &record else {
        return Err(InventoryError::InvalidDocument(format!(
            "record {} is not a JSON object",
            index
        )));
    };

    if let Some(field) = CORE_COLUMNS.iter().find(|c| !fields.contains_key(**c)) {
        return Err(InventoryError::MissingField {
            index,
            field: field.to_string(),
        });
    }

    if strict_fields {
        if let Some(field) = fields.keys().find(|k| !CORE_COLUMNS.contains(&k.as_str())) {
            return Err(InventoryError::UnexpectedField {
                index,
                field: field.clone(),
            });
        }
    }

    let raw: RawSceneRecord = serde_path_to_error::deserialize(record).map_err(|e| {
        InventoryError::RecordDecode {
            index,
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })?;

    Ok(raw.into())
}
