//! Station Processor Library
//!
//! A Rust library for converting transit station GeoJSON exports into a
//! normalized, merged JSON station list.
//!
//! This library provides tools for:
//! - Parsing GeoJSON feature collections and extracting station names,
//!   line names, and coordinates
//! - Converting each `.geojson` file into a per-file station list,
//!   deduplicated by lowercased name
//! - Merging converted lists into a single file deduplicated by exact name,
//!   with line lists unioned and records sorted ascending by name
//! - Writing human-readable JSON output with stable formatting

pub mod cli;
pub mod commands;
pub mod constants;
pub mod converter;
pub mod discovery;
pub mod error;
pub mod geojson;
pub mod merger;
pub mod models;
pub mod writer;

// Re-export commonly used types
pub use error::{Result, StationError};
pub use models::{ConvertStats, MergeStats, StationRecord};
