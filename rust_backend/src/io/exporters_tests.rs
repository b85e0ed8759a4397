#[cfg(test)]
mod tests {
    use crate::error::InventoryError;
    use crate::core::domain::TrackTimeline;
    use crate::io::exporters::{
        check_footprint_targets, export_footprints, save_inventory, timeline_file_name,
        write_summary_csv, write_track_timeline, SUMMARY_FILE_NAME,
    };
    use crate::services::{compute_track_timeline, partition_by_track, summarize_inventory};
    use crate::test_support::inventory;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> crate::core::domain::SceneTable {
        inventory(&[
            (64, "2018-01-01 14:19:06"),
            (64, "2018-01-01 14:19:31"),
            (64, "2018-01-13 14:19:06"),
            (100, "2018-01-02 02:00:00"),
        ])
    }

    #[test]
    fn test_timeline_csv_columns() {
        let dir = TempDir::new().unwrap();
        let table = sample();
        let partitions = partition_by_track(&table);
        let timeline = compute_track_timeline(&partitions[&64]).unwrap();

        let path = write_track_timeline(&timeline, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), timeline_file_name(64).as_str());

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "sceneDateString,platform,nFrames,dt");
        assert_eq!(lines[1], "2018-01-01,Sentinel-1A,2,0");
        assert_eq!(lines[2], "2018-01-13,Sentinel-1A,1,12");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_summary_csv_rows_descending() {
        let dir = TempDir::new().unwrap();
        let summary = summarize_inventory(&sample(), 5.0);
        let path = dir.path().join(SUMMARY_FILE_NAME);

        write_summary_csv(&summary, &path).unwrap();
        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Orbit,Start,Stop,Dates,Frames,Direction,UTC");
        assert_eq!(lines[1], "100,2018-01-02,2018-01-02,1,1,ASCENDING,02:00:00");
        assert_eq!(lines[2], "64,2018-01-01,2018-01-13,2,3,ASCENDING,14:19:06");
    }

    #[test]
    fn test_export_footprints_layout() {
        let dir = TempDir::new().unwrap();
        let table = sample();

        let written = export_footprints(&table, dir.path(), false).unwrap();
        assert_eq!(written.len(), 3);
        assert!(dir.path().join("64").join("2018-01-01.geojson").is_file());
        assert!(dir.path().join("64").join("2018-01-13.geojson").is_file());
        assert!(dir.path().join("100").join("2018-01-02.geojson").is_file());

        let json: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("64").join("2018-01-01.geojson")).unwrap(),
        )
        .unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["properties"]["granuleName"], "G0");
        assert_eq!(features[1]["properties"]["granuleName"], "G1");
        assert_eq!(features[0]["geometry"]["type"], "Polygon");
        assert!(features[0]["properties"]["downloadUrl"].is_string());
    }

    #[test]
    fn test_export_twice_without_overwrite_conflicts() {
        let dir = TempDir::new().unwrap();
        let table = sample();

        export_footprints(&table, dir.path(), false).unwrap();
        match export_footprints(&table, dir.path(), false) {
            Err(InventoryError::WriteConflict(path)) => {
                assert!(path.starts_with(dir.path()));
            }
            other => panic!("expected WriteConflict, got {:?}", other),
        }
    }

    #[test]
    fn test_export_overwrite_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let table = sample();

        export_footprints(&table, dir.path(), false).unwrap();
        let stale = dir.path().join("64").join("2017-12-20.geojson");
        fs::write(&stale, "{}").unwrap();

        export_footprints(&table, dir.path(), true).unwrap();
        assert!(!stale.exists());
        assert!(dir.path().join("64").join("2018-01-01.geojson").is_file());
    }

    #[test]
    fn test_conflict_detected_before_any_write() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("100")).unwrap();

        let result = export_footprints(&sample(), dir.path(), false);
        assert!(matches!(result, Err(InventoryError::WriteConflict(_))));
        assert!(!dir.path().join("64").exists());
    }

    #[test]
    fn test_save_inventory_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("query.geojson");
        fs::write(&path, "stale").unwrap();

        save_inventory(&sample(), &path).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), 4);
        let props = &features[3]["properties"];
        assert_eq!(props["relativeOrbit"], 100);
        assert_eq!(props["sceneDateString"], "2018-01-02");
        assert_eq!(props["utc"], "02:00:00");
        assert_eq!(props["flightDirection"], "ASCENDING");
        assert!(props.get("timeStamp").is_none());
        assert!(props.get("dateStamp").is_none());
    }

    #[test]
    fn test_empty_summary_still_has_header() {
        let dir = TempDir::new().unwrap();
        let summary = summarize_inventory(&inventory(&[]), 5.0);
        let path = dir.path().join(SUMMARY_FILE_NAME);
        write_summary_csv(&summary, &path).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "Orbit,Start,Stop,Dates,Frames,Direction,UTC\n");
    }

    #[test]
    fn test_empty_timeline_still_has_header() {
        let dir = TempDir::new().unwrap();
        let timeline = TrackTimeline {
            relative_orbit: 7,
            entries: Vec::new(),
        };
        let path = write_track_timeline(&timeline, dir.path()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "sceneDateString,platform,nFrames,dt\n");
    }

    #[test]
    fn test_check_footprint_targets_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let table = sample();

        check_footprint_targets(&table, dir.path(), false).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

        export_footprints(&table, dir.path(), false).unwrap();
        assert!(matches!(
            check_footprint_targets(&table, dir.path(), false),
            Err(InventoryError::WriteConflict(_))
        ));
        check_footprint_targets(&table, dir.path(), true).unwrap();
    }
}
