//! Converted station list merging.
//!
//! Concatenates every `.json` station list in the input directory,
//! deduplicates by exact name, unions line lists, sorts ascending by name,
//! and writes a single merged file. Unreadable or malformed files are logged
//! and skipped rather than aborting the run.

use crate::constants::CONVERTED_EXTENSION;
use crate::discovery::files_with_extension;
use crate::error::{Result, StationError};
use crate::models::{MergeStats, StationRecord};
use crate::writer::write_station_list;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error};

/// Merger for a directory of converted station lists
#[derive(Debug)]
pub struct ListMerger {
    input_dir: PathBuf,
    output_path: PathBuf,
}

impl ListMerger {
    /// Create a new merger
    pub fn new(input_dir: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_dir,
            output_path,
        }
    }

    /// Merge every station list in the input directory.
    ///
    /// Returns `Ok(None)` without writing output when the input directory is
    /// missing. Files that fail to read or parse are logged and skipped; the
    /// merged file is written regardless, possibly with zero stations.
    pub fn run(&self) -> Result<Option<MergeStats>> {
        let start_time = Instant::now();

        if !self.input_dir.exists() {
            error!("Directory {} does not exist", self.input_dir.display());
            return Ok(None);
        }

        let mut stats = MergeStats {
            output_path: self.output_path.clone(),
            ..MergeStats::default()
        };

        let mut all_stations: Vec<StationRecord> = Vec::new();
        for path in files_with_extension(&self.input_dir, CONVERTED_EXTENSION)? {
            match read_station_list(&path) {
                Ok(stations) => {
                    if !stations.is_empty() {
                        let filename = path
                            .file_name()
                            .map(|n| n.to_string_lossy())
                            .unwrap_or_default();
                        println!("Processed {} stations from {}", stations.len(), filename);
                        all_stations.extend(stations);
                    }
                    stats.files_merged += 1;
                }
                Err(e) => {
                    error!("Failed to process {}: {:#}", path.display(), e);
                    stats.files_skipped += 1;
                }
            }
        }

        debug!(
            "Collected {} records from {} files",
            all_stations.len(),
            stats.files_merged
        );

        let merged = merge_stations(all_stations);
        stats.stations_total = merged.len();
        write_station_list(&self.output_path, &merged)?;

        println!(
            "Processing complete. {} stations saved to {}",
            merged.len(),
            self.output_path.display()
        );

        stats.processing_time_ms = start_time.elapsed().as_millis();
        Ok(Some(stats))
    }
}

/// Deduplicate records by exact name, unioning line lists.
///
/// The first occurrence of a name keeps all of its other fields; later
/// occurrences only contribute lines. The result is sorted ascending by name.
pub fn merge_stations(records: Vec<StationRecord>) -> Vec<StationRecord> {
    let mut merged: Vec<StationRecord> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index_by_name.get(&record.name) {
            Some(&index) => merged[index].merge_lines(&record.lines),
            None => {
                index_by_name.insert(record.name.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged.sort_by(|a, b| a.name.cmp(&b.name));
    merged
}

/// Read one converted file as a station list
fn read_station_list(path: &Path) -> Result<Vec<StationRecord>> {
    let contents = fs::read_to_string(path).map_err(|source| StationError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| StationError::InvalidStationList {
        path: path.to_path_buf(),
        source,
    })
}
