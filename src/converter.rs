//! GeoJSON to station list conversion.
//!
//! Reads every `.geojson` file in the input directory and writes one
//! normalized station list per input file to the output directory, swapping
//! the extension for `.json`. Any unreadable or malformed input file aborts
//! the whole run.

use crate::constants::{GEOJSON_EXTENSION, UNKNOWN_STATION_NAME, converted_filename};
use crate::discovery::files_with_extension;
use crate::error::{Result, StationError};
use crate::geojson::{self, Feature, Geometry};
use crate::models::{ConvertStats, StationRecord};
use crate::writer::write_station_list;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Converter for a directory of GeoJSON station exports
#[derive(Debug)]
pub struct GeojsonConverter {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl GeojsonConverter {
    /// Create a new converter
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
        }
    }

    /// Convert every GeoJSON file in the input directory.
    ///
    /// Creates the output directory if absent. Files are processed in file
    /// name order; the first failure aborts the run, leaving earlier output
    /// files in place.
    pub fn run(&self) -> Result<ConvertStats> {
        let start_time = Instant::now();

        if !self.input_dir.exists() {
            return Err(StationError::InputDirNotFound {
                path: self.input_dir.clone(),
            });
        }

        fs::create_dir_all(&self.output_dir).map_err(|source| StationError::WriteFailed {
            path: self.output_dir.clone(),
            source,
        })?;

        let geojson_files = files_with_extension(&self.input_dir, GEOJSON_EXTENSION)?;
        debug!(
            "Found {} GeoJSON files in {}",
            geojson_files.len(),
            self.input_dir.display()
        );

        let mut stats = ConvertStats::default();
        for input_path in &geojson_files {
            stats.stations_written += self.convert_file(input_path)?;
            stats.files_converted += 1;
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        Ok(stats)
    }

    /// Convert a single GeoJSON file, returning the station count written
    fn convert_file(&self, input_path: &Path) -> Result<usize> {
        let output_path = self.output_path_for(input_path);

        let collection = geojson::read_feature_collection(input_path)?;
        let stations = stations_from_features(&collection.features);
        write_station_list(&output_path, &stations)?;

        println!("Converted data saved to {}", output_path.display());
        debug!(
            "Converted {} ({} features, {} stations)",
            input_path.display(),
            collection.features.len(),
            stations.len()
        );

        Ok(stations.len())
    }

    /// Output path for an input file: same stem, `.json` extension
    fn output_path_for(&self, input_path: &Path) -> PathBuf {
        let stem = input_path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        self.output_dir.join(converted_filename(&stem))
    }
}

/// Convert features into station records, deduplicating by lowercased name.
///
/// Records keep first-seen order. A repeated station gains any new line names
/// in encounter order; its coordinates stay those of the first occurrence.
pub fn stations_from_features(features: &[Feature]) -> Vec<StationRecord> {
    let mut stations: Vec<StationRecord> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for feature in features {
        let name_property = feature
            .properties
            .as_ref()
            .and_then(|properties| properties.name.as_deref());

        let station_name = name_property.unwrap_or(UNKNOWN_STATION_NAME).to_string();

        // Line heuristic: the segment after the last `/` of the name
        // property. Known-incomplete; the exports carry no separate line
        // field to parse instead.
        let raw_name = name_property.unwrap_or("");
        let line_name = raw_name.rsplit('/').next().unwrap_or(raw_name).to_string();

        let point = feature.geometry.as_ref().and_then(Geometry::first_point);
        let lat = point.map(|(_, lat)| lat);
        let lng = point.map(|(lng, _)| lng);

        let station_id = station_name.to_lowercase();
        match index_by_id.get(&station_id) {
            Some(&index) => stations[index].add_line(line_name),
            None => {
                index_by_id.insert(station_id, stations.len());
                stations.push(StationRecord::new(station_name, line_name, lat, lng));
            }
        }
    }

    stations
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn feature(json: &str) -> Feature {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_repeated_name_collapses_to_one_record() {
        let features = vec![
            feature(r#"{"properties": {"name": "東京/山手線"}, "geometry": null}"#),
            feature(r#"{"properties": {"name": "東京/中央線"}, "geometry": null}"#),
            feature(r#"{"properties": {"name": "東京/山手線"}, "geometry": null}"#),
        ];

        let stations = stations_from_features(&features);

        // The line is part of the name, so the two 山手線 features share a key
        // and collapse; the 中央線 feature is a distinct station record.
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "東京/山手線");
        assert_eq!(stations[0].lines, vec!["山手線"]);
        assert_eq!(stations[1].name, "東京/中央線");
        assert_eq!(stations[1].lines, vec!["中央線"]);
    }

    #[test]
    fn test_dedup_key_is_case_insensitive() {
        let features = vec![
            feature(r#"{"properties": {"name": "Tokyo"}, "geometry": null}"#),
            feature(r#"{"properties": {"name": "TOKYO"}, "geometry": null}"#),
        ];

        let stations = stations_from_features(&features);

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Tokyo");
        assert_eq!(stations[0].id.as_deref(), Some("tokyo"));
        assert_eq!(stations[0].lines, vec!["Tokyo", "TOKYO"]);
    }

    #[test]
    fn test_nameless_feature_gets_placeholder() {
        let features = vec![feature(r#"{"properties": {}, "geometry": null}"#)];

        let stations = stations_from_features(&features);

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, UNKNOWN_STATION_NAME);
        assert_eq!(stations[0].id.as_deref(), Some(UNKNOWN_STATION_NAME));
        assert_eq!(stations[0].lines, vec![""]);
    }

    #[test]
    fn test_coordinates_from_nested_first_point() {
        let features = vec![feature(
            r#"{
                "properties": {"name": "渋谷"},
                "geometry": {"coordinates": [[139.7016, 35.658], [139.7020, 35.659]]}
            }"#,
        )];

        let stations = stations_from_features(&features);

        assert_eq!(stations[0].lng, Some(139.7016));
        assert_eq!(stations[0].lat, Some(35.658));
    }

    #[test]
    fn test_flat_point_coordinates_are_ignored() {
        let features = vec![feature(
            r#"{"properties": {"name": "渋谷"}, "geometry": {"coordinates": [139.7016, 35.658]}}"#,
        )];

        let stations = stations_from_features(&features);

        assert_eq!(stations[0].lat, None);
        assert_eq!(stations[0].lng, None);
    }

    #[test]
    fn test_repeat_keeps_first_coordinates() {
        let features = vec![
            feature(
                r#"{
                    "properties": {"name": "品川/山手線"},
                    "geometry": {"coordinates": [[139.73, 35.62]]}
                }"#,
            ),
            feature(
                r#"{
                    "properties": {"name": "品川/山手線"},
                    "geometry": {"coordinates": [[999.0, 999.0]]}
                }"#,
            ),
        ];

        let stations = stations_from_features(&features);

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].lng, Some(139.73));
        assert_eq!(stations[0].lat, Some(35.62));
    }

    #[test]
    fn test_run_converts_directory() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("geojson");
        let output_dir = temp_dir.path().join("converted_json");
        fs::create_dir_all(&input_dir).unwrap();

        fs::write(
            input_dir.join("east.geojson"),
            r#"{"features": [{"properties": {"name": "東京/山手線"}, "geometry": {"coordinates": [[139.76, 35.68]]}}]}"#,
        )
        .unwrap();
        fs::write(
            input_dir.join("west.geojson"),
            r#"{"features": [{"properties": {"name": "新宿/中央線"}, "geometry": {"coordinates": [[139.70, 35.69]]}}]}"#,
        )
        .unwrap();
        fs::write(input_dir.join("notes.txt"), "ignored").unwrap();

        let converter = GeojsonConverter::new(input_dir, output_dir.clone());
        let stats = converter.run().unwrap();

        assert_eq!(stats.files_converted, 2);
        assert_eq!(stats.stations_written, 2);

        let east: Vec<StationRecord> =
            serde_json::from_str(&fs::read_to_string(output_dir.join("east.json")).unwrap())
                .unwrap();
        assert_eq!(east.len(), 1);
        assert_eq!(east[0].name, "東京/山手線");
        assert_eq!(east[0].lng, Some(139.76));

        assert!(output_dir.join("west.json").exists());
    }

    #[test]
    fn test_run_creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("geojson");
        let output_dir = temp_dir.path().join("converted_json");
        fs::create_dir_all(&input_dir).unwrap();

        let converter = GeojsonConverter::new(input_dir, output_dir.clone());
        let stats = converter.run().unwrap();

        assert!(output_dir.is_dir());
        assert_eq!(stats.files_converted, 0);
    }

    #[test]
    fn test_malformed_file_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("geojson");
        let output_dir = temp_dir.path().join("converted_json");
        fs::create_dir_all(&input_dir).unwrap();

        fs::write(
            input_dir.join("a_valid.geojson"),
            r#"{"features": [{"properties": {"name": "東京"}, "geometry": null}]}"#,
        )
        .unwrap();
        fs::write(input_dir.join("b_broken.geojson"), "not json at all").unwrap();
        fs::write(
            input_dir.join("c_unreached.geojson"),
            r#"{"features": []}"#,
        )
        .unwrap();

        let converter = GeojsonConverter::new(input_dir, output_dir.clone());
        let result = converter.run();

        assert!(matches!(result, Err(StationError::InvalidGeoJson { .. })));

        // Files sort before the broken one are already written, later ones are not
        assert!(output_dir.join("a_valid.json").exists());
        assert!(!output_dir.join("b_broken.json").exists());
        assert!(!output_dir.join("c_unreached.json").exists());
    }

    #[test]
    fn test_missing_features_key_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("geojson");
        fs::create_dir_all(&input_dir).unwrap();

        fs::write(
            input_dir.join("no_features.geojson"),
            r#"{"type": "FeatureCollection"}"#,
        )
        .unwrap();

        let converter =
            GeojsonConverter::new(input_dir, temp_dir.path().join("converted_json"));
        assert!(matches!(
            converter.run(),
            Err(StationError::InvalidGeoJson { .. })
        ));
    }

    #[test]
    fn test_missing_input_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("no_such_dir");

        let converter =
            GeojsonConverter::new(input_dir.clone(), temp_dir.path().join("converted_json"));
        match converter.run() {
            Err(StationError::InputDirNotFound { path }) => assert_eq!(path, input_dir),
            other => panic!("Expected InputDirNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("geojson");
        let output_dir = temp_dir.path().join("converted_json");
        fs::create_dir_all(&input_dir).unwrap();

        fs::write(
            input_dir.join("stations.geojson"),
            r#"{"features": [
                {"properties": {"name": "大阪/環状線"}, "geometry": {"coordinates": [[135.49, 34.70]]}},
                {"properties": {"name": "大阪/御堂筋線"}, "geometry": {"coordinates": [[135.49, 34.70]]}}
            ]}"#,
        )
        .unwrap();

        let converter = GeojsonConverter::new(input_dir, output_dir.clone());
        converter.run().unwrap();
        let first = fs::read(output_dir.join("stations.json")).unwrap();
        converter.run().unwrap();
        let second = fs::read(output_dir.join("stations.json")).unwrap();

        assert_eq!(first, second);
    }
}
