//! Dataset loading for the cleaned POI table and the LULC change table.
//!
//! Rows with missing or invalid coordinates are dropped here, so the
//! proximity engine only ever sees valid points.

use std::fs::File;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::error::{GreenreachError, Result};
use crate::lulc::ChangeRecord;
use crate::{GeoPoint, PoiCategory, PointOfInterest};

/// Columns the POI table must carry.
const POI_COLUMNS: [&str; 4] = ["name", "category", "lat", "lon"];

/// Columns the LULC change table must carry.
const CHANGE_COLUMNS: [&str; 4] = ["from_class", "to_class", "year_to", "area_km2"];

/// One raw row of the cleaned POI table. Coordinates stay optional until
/// validated; empty cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct PoiRow {
    name: String,
    category: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Load the cleaned green-space dataset from a CSV file with columns
/// `name, category, lat, lon`.
///
/// Rows with missing or out-of-range coordinates are dropped (and counted
/// in a warning), matching the upstream contract that the proximity
/// engine receives only valid points.
pub fn load_poi_dataset(path: impl AsRef<Path>) -> Result<Vec<PointOfInterest>> {
    let path = path.as_ref();
    let mut reader =
        csv::Reader::from_path(path).map_err(|source| GreenreachError::dataset_load(path, source))?;
    check_columns(path, &mut reader, &POI_COLUMNS)?;

    let mut points = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize::<PoiRow>() {
        let row = row.map_err(|source| GreenreachError::dataset_load(path, source))?;
        match (row.lat, row.lon) {
            (Some(lat), Some(lon)) if GeoPoint::new(lat, lon).is_valid() => {
                points.push(PointOfInterest::new(
                    row.name,
                    PoiCategory::parse(&row.category),
                    lat,
                    lon,
                ));
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(
            "dropped {} rows with missing or invalid coordinates from {}",
            dropped,
            path.display()
        );
    }
    Ok(points)
}

/// Load MODIS land-cover change records from a CSV file with columns
/// `from_class, to_class, year_to, area_km2`.
pub fn load_change_records(path: impl AsRef<Path>) -> Result<Vec<ChangeRecord>> {
    let path = path.as_ref();
    let mut reader =
        csv::Reader::from_path(path).map_err(|source| GreenreachError::dataset_load(path, source))?;
    check_columns(path, &mut reader, &CHANGE_COLUMNS)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<ChangeRecord>() {
        let record = row.map_err(|source| GreenreachError::dataset_load(path, source))?;
        records.push(record);
    }
    Ok(records)
}

/// Fail fast when a required column is absent from the header.
fn check_columns(path: &Path, reader: &mut csv::Reader<File>, required: &[&str]) -> Result<()> {
    let headers = reader
        .headers()
        .map_err(|source| GreenreachError::dataset_load(path, source))?
        .clone();
    for column in required {
        if !headers.iter().any(|h| h.trim() == *column) {
            return Err(GreenreachError::missing_column(path, *column));
        }
    }
    Ok(())
}
