//! Tests for error module

use greenreach::error::{GreenreachError, OptionExt};

#[test]
fn test_invalid_coordinate_display() {
    let err = GreenreachError::InvalidCoordinate {
        latitude: 200.0,
        longitude: 77.2,
    };
    assert!(err.to_string().contains("latitude 200"));
    assert!(err.to_string().contains("longitude 77.2"));
}

#[test]
fn test_invalid_k_display() {
    let err = GreenreachError::InvalidK { k: 0 };
    assert!(err.to_string().contains("got 0"));
}

#[test]
fn test_missing_column_display() {
    let err = GreenreachError::missing_column("greenspaces.csv", "lon");
    assert!(err.to_string().contains("greenspaces.csv"));
    assert!(err.to_string().contains("'lon'"));
}

#[test]
fn test_option_ext() {
    let none: Option<i32> = None;
    let result = none.ok_or_empty_index();
    assert!(matches!(result, Err(GreenreachError::EmptyIndex)));

    assert_eq!(Some(5).ok_or_empty_index().unwrap(), 5);
}
