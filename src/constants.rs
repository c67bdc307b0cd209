//! Application constants for the station processor
//!
//! This module contains the directory layout, file extension, and default
//! value constants used throughout the station processor application.

// =============================================================================
// Directory and File Layout
// =============================================================================

/// Default directory containing raw GeoJSON exports
pub const GEOJSON_INPUT_DIR: &str = "geojson";

/// Default directory for converted per-file station lists
pub const CONVERTED_OUTPUT_DIR: &str = "converted_json";

/// Filename of the final merged station list
pub const MERGED_OUTPUT_FILENAME: &str = "merged_list.json";

/// Extension of raw input files
pub const GEOJSON_EXTENSION: &str = "geojson";

/// Extension of converted station list files
pub const CONVERTED_EXTENSION: &str = "json";

// =============================================================================
// Station Defaults
// =============================================================================

/// Name assigned to stations whose GeoJSON feature carries no name property
pub const UNKNOWN_STATION_NAME: &str = "不明な駅";

// =============================================================================
// Output Formatting
// =============================================================================

/// Indentation used when serializing station list JSON
pub const JSON_INDENT: &[u8] = b"    ";

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the expected converted filename for an input file stem
pub fn converted_filename(stem: &str) -> String {
    format!("{}.{}", stem, CONVERTED_EXTENSION)
}
