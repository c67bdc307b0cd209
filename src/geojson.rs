//! GeoJSON parsing and coordinate extraction.
//!
//! Parses station exports as a minimal GeoJSON-like structure. Only the
//! pieces the converter reads are modeled: the top-level `features` array,
//! the `name` property, and the geometry coordinates.

use crate::error::{Result, StationError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top level of a GeoJSON document.
///
/// A document without a `features` array fails deserialization.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// A single GeoJSON feature.
///
/// Both members are optional so sparse exports still convert; missing values
/// fall back per the station record rules.
#[derive(Debug, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Feature properties. Only `name` is read.
#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub name: Option<String>,
}

/// Feature geometry.
///
/// Coordinates stay dynamic because the exports mix point, multi-point, and
/// polygon geometries in the same directory.
#[derive(Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl Geometry {
    /// First `[lng, lat]` pair of a nested coordinate array.
    ///
    /// Deliberately narrow: only nested geometries (`[[lng, lat], ...]`)
    /// yield a point. A flat `[lng, lat]` point array, an empty array, or a
    /// first element with missing or non-numeric components all yield `None`.
    pub fn first_point(&self) -> Option<(f64, f64)> {
        let first = self.coordinates.as_array()?.first()?.as_array()?;
        let lng = first.first()?.as_f64()?;
        let lat = first.get(1)?.as_f64()?;
        Some((lng, lat))
    }
}

/// Parse a GeoJSON file into a feature collection.
///
/// Fails if the file cannot be read, is not well-formed JSON, or lacks a
/// top-level `features` array.
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let contents = fs::read_to_string(path).map_err(|source| StationError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| StationError::InvalidGeoJson {
        path: path.to_path_buf(),
        source,
    })
}
