//! Seasonal vegetation-health (NDVI) classification and trends.
//!
//! NDVI values are bucketed into three fixed classes; area records per
//! year/season/class feed the yearly trend and the pre/post-monsoon
//! comparison the dashboard displays. Winter and monsoon seasons are
//! absent from the source data (cloud cover), so only the two monsoon
//! shoulders are modeled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Observation season for an NDVI composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    PreMonsoon,
    PostMonsoon,
}

impl Season {
    /// Label used by the source data and the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Season::PreMonsoon => "Pre-Monsoon",
            Season::PostMonsoon => "Post-Monsoon",
        }
    }
}

/// Vegetation class derived from an NDVI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NdviClass {
    /// NDVI below 0.2: barren, built-up, or dry soil.
    Barren,
    /// NDVI 0.2 to 0.5: moderate vegetation.
    Moderate,
    /// NDVI above 0.5: dense vegetation.
    Dense,
}

impl NdviClass {
    /// All classes, from least to most vegetated.
    pub const ALL: [NdviClass; 3] = [NdviClass::Barren, NdviClass::Moderate, NdviClass::Dense];

    /// Classify an NDVI value using the fixed thresholds.
    pub fn classify(value: f64) -> Self {
        if value < 0.2 {
            NdviClass::Barren
        } else if value <= 0.5 {
            NdviClass::Moderate
        } else {
            NdviClass::Dense
        }
    }

    /// Short class label.
    pub fn label(&self) -> &'static str {
        match self {
            NdviClass::Barren => "Barren / built-up / dry soil",
            NdviClass::Moderate => "Moderate vegetation",
            NdviClass::Dense => "Dense vegetation",
        }
    }

    /// NDVI value range, as displayed in the map legend.
    pub fn range_description(&self) -> &'static str {
        match self {
            NdviClass::Barren => "< 0.2",
            NdviClass::Moderate => "0.2-0.5",
            NdviClass::Dense => "> 0.5",
        }
    }

    /// Typical surface for this class.
    pub fn typical_surface(&self) -> &'static str {
        match self {
            NdviClass::Barren => "Urban, concrete, bare land",
            NdviClass::Moderate => "Grassland, cropland, shrubs",
            NdviClass::Dense => "Forest, parks, tree cover",
        }
    }
}

/// Area covered by one vegetation class in one season of one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassArea {
    pub year: u16,
    pub season: Season,
    pub class: NdviClass,
    pub area_km2: f64,
}

/// Per-class area totals by year for one season, ascending by year.
pub fn yearly_trend(
    records: &[ClassArea],
    season: Season,
) -> BTreeMap<u16, BTreeMap<NdviClass, f64>> {
    let mut trend: BTreeMap<u16, BTreeMap<NdviClass, f64>> = BTreeMap::new();
    for r in records.iter().filter(|r| r.season == season) {
        *trend
            .entry(r.year)
            .or_default()
            .entry(r.class)
            .or_insert(0.0) += r.area_km2;
    }
    trend
}

/// Pre- vs post-monsoon class areas for a single year.
///
/// A season with no records for the year is `None`; the dashboard shows
/// "map not available" for those.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonComparison {
    pub year: u16,
    pub pre_monsoon: Option<BTreeMap<NdviClass, f64>>,
    pub post_monsoon: Option<BTreeMap<NdviClass, f64>>,
}

/// Compare the two seasons of one year.
pub fn season_comparison(records: &[ClassArea], year: u16) -> SeasonComparison {
    let one_season = |season: Season| {
        let mut areas: BTreeMap<NdviClass, f64> = BTreeMap::new();
        for r in records
            .iter()
            .filter(|r| r.year == year && r.season == season)
        {
            *areas.entry(r.class).or_insert(0.0) += r.area_km2;
        }
        if areas.is_empty() {
            None
        } else {
            Some(areas)
        }
    };

    SeasonComparison {
        year,
        pre_monsoon: one_season(Season::PreMonsoon),
        post_monsoon: one_season(Season::PostMonsoon),
    }
}

/// Sorted, deduplicated years present in the records.
pub fn available_years(records: &[ClassArea]) -> Vec<u16> {
    let mut years: Vec<u16> = records.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}
