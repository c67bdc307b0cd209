//! JSON output writing for station lists.
//!
//! Serializes station records as a human-readable JSON array with four-space
//! indentation, leaving non-ASCII names unescaped.

use crate::constants::JSON_INDENT;
use crate::error::{Result, StationError};
use crate::models::StationRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write station records to `path` as an indented JSON array
pub fn write_station_list(path: &Path, stations: &[StationRecord]) -> Result<()> {
    let file = File::create(path).map_err(|source| StationError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(BufWriter::new(file), formatter);
    stations
        .serialize(&mut serializer)
        .map_err(|source| StationError::WriteFailed {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

    serializer
        .into_inner()
        .flush()
        .map_err(|source| StationError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}
