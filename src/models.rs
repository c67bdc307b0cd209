//! Core data structures for station list processing.
//!
//! Defines the normalized station record shared by the converter and the
//! merger, plus the statistics structs returned by each stage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Station Record
// =============================================================================

/// Normalized station record produced by the converter and consumed by the
/// merger.
///
/// Serialized field names follow the established output schema, so
/// `first_departure` maps to `firstDeparture` on disk. Every field is written
/// on serialization, including unset options, which appear as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    /// Lowercased station name, used as the dedup key within one converted
    /// file
    #[serde(default)]
    pub id: Option<String>,

    /// Display name, taken verbatim from the source data
    pub name: String,

    /// Transit lines serving the station, in first-seen order
    #[serde(default)]
    pub lines: Vec<String>,

    /// Daily passenger count; never populated by the converter
    #[serde(default)]
    pub passengers: Option<u64>,

    /// First departure time; never populated by the converter
    #[serde(default)]
    pub first_departure: Option<String>,

    /// Latitude of the station's first geometry point
    #[serde(default)]
    pub lat: Option<f64>,

    /// Longitude of the station's first geometry point
    #[serde(default)]
    pub lng: Option<f64>,
}

impl StationRecord {
    /// Create a record for a station first seen with `line`
    pub fn new(name: String, line: String, lat: Option<f64>, lng: Option<f64>) -> Self {
        Self {
            id: Some(name.to_lowercase()),
            name,
            lines: vec![line],
            passengers: None,
            first_departure: None,
            lat,
            lng,
        }
    }

    /// Append a line unless the record already lists it
    pub fn add_line(&mut self, line: String) {
        if !self.lines.contains(&line) {
            self.lines.push(line);
        }
    }

    /// Union `incoming` into this record's lines, dropping duplicates.
    ///
    /// The whole list is rebuilt, so duplicates already present in the record
    /// are removed as well.
    pub fn merge_lines(&mut self, incoming: &[String]) {
        let mut merged: Vec<String> = Vec::with_capacity(self.lines.len() + incoming.len());
        for line in self.lines.drain(..).chain(incoming.iter().cloned()) {
            if !merged.contains(&line) {
                merged.push(line);
            }
        }
        self.lines = merged;
    }
}

// =============================================================================
// Processing Statistics
// =============================================================================

/// Statistics from a conversion run
#[derive(Debug, Default)]
pub struct ConvertStats {
    pub files_converted: usize,
    pub stations_written: usize,
    pub processing_time_ms: u128,
}

/// Statistics from a merge run
#[derive(Debug, Default)]
pub struct MergeStats {
    pub files_merged: usize,
    pub files_skipped: usize,
    pub stations_total: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}
