#[cfg(test)]
mod tests {
    use crate::error::InventoryError;
    use crate::io::loaders::InventoryLoader;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record(granule: &str, platform: &str, orbit: &str, date: &str) -> String {
        format!(
            r#"{{
                "granuleName": "{granule}",
                "platform": "{platform}",
                "relativeOrbit": "{orbit}",
                "sceneDate": "{date}",
                "flightDirection": "ASCENDING",
                "stringFootprint": "POLYGON((-123.0 46.0,-120.0 46.4,-119.7 48.0,-122.8 47.6,-123.0 46.0))",
                "downloadUrl": "https://example.org/{granule}.zip",
                "beamMode": "IW"
            }}"#
        )
    }

    /// Helper to create a temp archive result file in the archive's nested layout
    fn create_temp_json_file(records: &[String]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[[{}]]", records.join(",")).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = create_temp_json_file(&[
            record("A1", "Sentinel-1A", "64", "2018-01-01 14:19:06"),
            record("A2", "Sentinel-1A", "64", "2018-01-13 14:19:06"),
        ]);

        let table = InventoryLoader::new().load_from_file(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.extra_columns(), &["beamMode"]);
    }

    #[test]
    fn test_load_and_merge_two_platforms() {
        let s1a: Vec<String> = (1..=5)
            .map(|d| record(&format!("A{d}"), "Sentinel-1A", "64", &format!("2018-01-{d:02} 14:19:06")))
            .collect();
        let s1b: Vec<String> = (1..=3)
            .map(|d| record(&format!("B{d}"), "Sentinel-1B", "100", &format!("2018-02-{d:02} 02:00:00")))
            .collect();
        let file_a = create_temp_json_file(&s1a);
        let file_b = create_temp_json_file(&s1b);

        let table = InventoryLoader::new()
            .load_and_merge(&[file_a.path(), file_b.path()])
            .unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.rows()[0].granule_name, "A1");
        assert_eq!(table.rows()[5].granule_name, "B1");
        assert_eq!(table.rows()[7].granule_name, "B3");
    }

    #[test]
    fn test_strict_loader_rejects_extra_attributes() {
        let file = create_temp_json_file(&[record("A1", "Sentinel-1A", "64", "2018-01-01 14:19:06")]);

        let result = InventoryLoader::new().strict(true).load_from_file(file.path());
        assert!(matches!(result, Err(InventoryError::UnexpectedField { .. })));
    }

    #[test]
    fn test_load_from_str_propagates_timestamp_error() {
        let json = format!("[[{}]]", record("A1", "Sentinel-1A", "64", "01/01/2018 14:19"));

        match InventoryLoader::new().load_from_str(&json) {
            Err(InventoryError::TimestampParse { granule, .. }) => assert_eq!(granule, "A1"),
            other => panic!("expected TimestampParse, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_fails_when_one_file_is_bad() {
        let good = create_temp_json_file(&[record("A1", "Sentinel-1A", "64", "2018-01-01 14:19:06")]);
        let bad = create_temp_json_file(&[record("B1", "Sentinel-1B", "64", "not a date")]);

        let result = InventoryLoader::new().load_and_merge(&[good.path(), bad.path()]);
        assert!(matches!(result, Err(InventoryError::TimestampParse { .. })));
    }
}
