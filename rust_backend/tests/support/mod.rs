#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// One archive record as JSON, with the archive's string-typed values.
pub fn archive_record(granule: &str, platform: &str, orbit: u32, scene_date: &str) -> String {
    serde_json::json!({
        "granuleName": granule,
        "platform": platform,
        "relativeOrbit": orbit.to_string(),
        "sceneDate": scene_date,
        "flightDirection": "DESCENDING",
        "stringFootprint": "POLYGON((-123.0 46.0,-120.0 46.4,-119.7 48.0,-122.8 47.6,-123.0 46.0))",
        "downloadUrl": format!("https://datapool.asf.alaska.edu/SLC/{}.zip", granule),
        "beamMode": "IW",
        "processingLevel": "SLC"
    })
    .to_string()
}

/// Archive result document (`[[record, ...]]`) for `(orbit, sceneDate)` rows.
pub fn archive_document(prefix: &str, platform: &str, rows: &[(u32, &str)]) -> String {
    let records: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(i, (orbit, date))| archive_record(&format!("{}{}", prefix, i), platform, *orbit, date))
        .collect();
    format!("[[{}]]", records.join(","))
}

/// Write a document to a temporary file kept alive by the returned handle.
pub fn write_temp(document: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(document.as_bytes()).expect("write temp file");
    file
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
