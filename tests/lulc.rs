//! Tests for the land-cover change analysis

use greenreach::lulc::{
    annual_conversion, summarize, AnnualConversion, ChangeFilter, ChangeRecord, LandCoverClass,
};

fn record(from_class: u16, to_class: u16, year_to: u16, area_km2: f64) -> ChangeRecord {
    ChangeRecord {
        from_class,
        to_class,
        year_to,
        area_km2,
    }
}

#[test]
fn test_class_code_roundtrip() {
    for class in [
        LandCoverClass::Savannas,
        LandCoverClass::Grasslands,
        LandCoverClass::Wetlands,
        LandCoverClass::Croplands,
        LandCoverClass::Urban,
        LandCoverClass::CroplandMosaic,
    ] {
        assert_eq!(LandCoverClass::from_code(class.code()), Some(class));
    }
    assert_eq!(LandCoverClass::from_code(1), None);
}

#[test]
fn test_default_sources_exclude_mosaic() {
    let sources = LandCoverClass::default_sources();
    assert!(!sources.contains(&LandCoverClass::CroplandMosaic));
    assert!(sources.contains(&LandCoverClass::Croplands));
}

#[test]
fn test_filter_keeps_only_urban_conversions_in_range() {
    let records = vec![
        record(12, 13, 2004, 1.0),  // cropland -> urban, in range
        record(10, 13, 2005, 2.0),  // grassland -> urban, in range
        record(12, 10, 2005, 4.0),  // not a conversion to urban
        record(14, 13, 2005, 8.0),  // mosaic source, excluded by default
        record(12, 13, 2019, 16.0), // outside year range
        record(3, 13, 2005, 32.0),  // unknown source code
    ];

    let filter = ChangeFilter {
        years: (2002, 2010),
        ..ChangeFilter::default()
    };
    let selected = filter.apply(&records);

    let total: f64 = selected.iter().map(|r| r.area_km2).sum();
    assert_eq!(selected.len(), 2);
    assert!((total - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_annual_conversion_sums_per_year() {
    let records = vec![
        record(12, 13, 2005, 1.5),
        record(10, 13, 2005, 0.5),
        record(12, 13, 2004, 3.0),
    ];

    let annual = annual_conversion(&records);

    assert_eq!(annual.len(), 2);
    assert_eq!(annual[0].year, 2004);
    assert!((annual[0].area_km2 - 3.0).abs() < f64::EPSILON);
    assert_eq!(annual[1].year, 2005);
    assert!((annual[1].area_km2 - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_summary_total_and_peak() {
    let annual = vec![
        AnnualConversion {
            year: 2004,
            area_km2: 3.0,
        },
        AnnualConversion {
            year: 2005,
            area_km2: 2.0,
        },
        AnnualConversion {
            year: 2006,
            area_km2: 3.0,
        },
    ];

    let summary = summarize(&annual);

    assert!((summary.total_area_km2 - 8.0).abs() < f64::EPSILON);
    // Earlier year wins a tied peak
    let peak = summary.peak.unwrap();
    assert_eq!(peak.year, 2004);
    assert!((peak.area_km2 - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_summary_of_empty_selection() {
    let summary = summarize(&[]);
    assert_eq!(summary.total_area_km2, 0.0);
    assert!(summary.peak.is_none());
}
