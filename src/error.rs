//! Error handling for station list processing.
//!
//! Provides error types with path context for file conversion and merge
//! failures. The converter and the merger apply different policies to these
//! errors: the converter aborts on the first one, the merger isolates
//! per-file errors and keeps going.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input directory not found: {path}")]
    InputDirNotFound { path: PathBuf },

    #[error("Failed to read file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid GeoJSON in file: {path}")]
    InvalidGeoJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid station list in file: {path}")]
    InvalidStationList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Directory traversal error: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, StationError>;
