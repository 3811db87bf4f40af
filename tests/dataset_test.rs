//! Integration tests for dataset loading

use std::io::Write;

use greenreach::{load_change_records, load_poi_dataset, GreenreachError, PoiCategory};
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_loads_valid_rows() {
    let file = write_csv(
        "name,category,lat,lon\n\
         Lodhi Garden,Park/Garden,28.5931,77.2197\n\
         Ridge,Forest,28.68,77.20\n\
         Roundabout Patch,Green Patch,28.63,77.22\n",
    );

    let points = load_poi_dataset(file.path()).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].name, "Lodhi Garden");
    assert_eq!(points[0].category, PoiCategory::ParkGarden);
    assert_eq!(points[1].category, PoiCategory::Forest);
    // Unrecognized labels land in Other
    assert_eq!(points[2].category, PoiCategory::Other);
}

#[test]
fn test_drops_rows_with_missing_or_invalid_coordinates() {
    let file = write_csv(
        "name,category,lat,lon\n\
         Valid,Park/Garden,28.60,77.20\n\
         No latitude,Park/Garden,,77.20\n\
         No longitude,Park/Garden,28.60,\n\
         Out of range,Park/Garden,200.0,77.20\n",
    );

    let points = load_poi_dataset(file.path()).unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].name, "Valid");
}

#[test]
fn test_extra_columns_are_tolerated() {
    let file = write_csv(
        "id,name,category,lat,lon,notes\n\
         7,Deer Park,Park/Garden,28.5494,77.1983,popular\n",
    );

    let points = load_poi_dataset(file.path()).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].name, "Deer Park");
}

#[test]
fn test_missing_column_fails() {
    let file = write_csv("name,category,lat\nLodhi Garden,Park/Garden,28.5931\n");

    let result = load_poi_dataset(file.path());
    match result {
        Err(GreenreachError::MissingColumn { column, .. }) => assert_eq!(column, "lon"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_missing_file_fails() {
    let result = load_poi_dataset("/nonexistent/greenspaces.csv");
    assert!(matches!(result, Err(GreenreachError::DatasetLoad { .. })));
}

#[test]
fn test_loads_change_records() {
    let file = write_csv(
        "from_class,to_class,year_to,area_km2\n\
         12,13,2004,1.25\n\
         10,13,2005,0.50\n",
    );

    let records = load_change_records(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].from_class, 12);
    assert_eq!(records[0].year_to, 2004);
    assert!((records[1].area_km2 - 0.50).abs() < f64::EPSILON);
}

#[test]
fn test_change_records_missing_column_fails() {
    let file = write_csv("from_class,to_class,year_to\n12,13,2004\n");

    let result = load_change_records(file.path());
    match result {
        Err(GreenreachError::MissingColumn { column, .. }) => assert_eq!(column, "area_km2"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}
