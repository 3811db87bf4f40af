//! Land-use/land-cover change analysis over MODIS class-transition
//! records.
//!
//! The change table lists how much area moved from one land-cover class
//! to another per year. The analysis here reproduces the dashboard view:
//! conversion of green classes to urban, filtered by year range and
//! source class, aggregated per year, with headline metrics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// MODIS IGBP land-cover classes present in the change table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandCoverClass {
    Savannas,
    Grasslands,
    Wetlands,
    Croplands,
    Urban,
    /// Cropland/natural vegetation mosaic; excluded from the default
    /// source selection, as in the published analysis.
    CroplandMosaic,
}

impl LandCoverClass {
    /// Map a MODIS IGBP class code to a known class.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            9 => Some(LandCoverClass::Savannas),
            10 => Some(LandCoverClass::Grasslands),
            11 => Some(LandCoverClass::Wetlands),
            12 => Some(LandCoverClass::Croplands),
            13 => Some(LandCoverClass::Urban),
            14 => Some(LandCoverClass::CroplandMosaic),
            _ => None,
        }
    }

    /// The MODIS IGBP class code.
    pub fn code(&self) -> u16 {
        match self {
            LandCoverClass::Savannas => 9,
            LandCoverClass::Grasslands => 10,
            LandCoverClass::Wetlands => 11,
            LandCoverClass::Croplands => 12,
            LandCoverClass::Urban => 13,
            LandCoverClass::CroplandMosaic => 14,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            LandCoverClass::Savannas => "Savannas",
            LandCoverClass::Grasslands => "Grasslands",
            LandCoverClass::Wetlands => "Wetlands",
            LandCoverClass::Croplands => "Croplands",
            LandCoverClass::Urban => "Urban",
            LandCoverClass::CroplandMosaic => "Cropland/Natural Vegetation Mosaic",
        }
    }

    /// The green source classes selectable in the conversion analysis.
    pub fn default_sources() -> Vec<LandCoverClass> {
        vec![
            LandCoverClass::Savannas,
            LandCoverClass::Grasslands,
            LandCoverClass::Wetlands,
            LandCoverClass::Croplands,
        ]
    }
}

/// One class-transition row of the change table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// MODIS class code the area converted from.
    pub from_class: u16,
    /// MODIS class code the area converted to.
    pub to_class: u16,
    /// Year the conversion was observed.
    pub year_to: u16,
    /// Converted area in square kilometers.
    pub area_km2: f64,
}

impl ChangeRecord {
    /// The source class, when its code is a known class.
    pub fn source_class(&self) -> Option<LandCoverClass> {
        LandCoverClass::from_code(self.from_class)
    }

    /// Whether this record describes conversion to urban land.
    pub fn is_to_urban(&self) -> bool {
        self.to_class == LandCoverClass::Urban.code()
    }
}

/// Filter for the conversion-to-urban view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeFilter {
    /// Inclusive year range.
    pub years: (u16, u16),
    /// Source classes to include.
    pub from_classes: Vec<LandCoverClass>,
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self {
            years: (2002, 2021),
            from_classes: LandCoverClass::default_sources(),
        }
    }
}

impl ChangeFilter {
    /// Keep records converting to urban from a selected source class
    /// within the year range. Records whose source code is unknown are
    /// excluded, as they are in the dashboard.
    pub fn apply(&self, records: &[ChangeRecord]) -> Vec<ChangeRecord> {
        records
            .iter()
            .copied()
            .filter(|r| {
                r.is_to_urban()
                    && r.year_to >= self.years.0
                    && r.year_to <= self.years.1
                    && r.source_class()
                        .is_some_and(|c| self.from_classes.contains(&c))
            })
            .collect()
    }
}

/// Total converted area for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualConversion {
    pub year: u16,
    pub area_km2: f64,
}

/// Sum converted area per year, ascending by year.
pub fn annual_conversion(records: &[ChangeRecord]) -> Vec<AnnualConversion> {
    let mut by_year: BTreeMap<u16, f64> = BTreeMap::new();
    for r in records {
        *by_year.entry(r.year_to).or_insert(0.0) += r.area_km2;
    }
    by_year
        .into_iter()
        .map(|(year, area_km2)| AnnualConversion { year, area_km2 })
        .collect()
}

/// Headline metrics for a filtered selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionSummary {
    /// Total area converted over the selection, in square kilometers.
    pub total_area_km2: f64,
    /// Year with the largest converted area; `None` for an empty
    /// selection. Earlier year wins a tie.
    pub peak: Option<AnnualConversion>,
}

/// Summarize per-year conversions into headline metrics.
pub fn summarize(annual: &[AnnualConversion]) -> ConversionSummary {
    let total_area_km2 = annual.iter().map(|a| a.area_km2).sum();

    let mut peak: Option<AnnualConversion> = None;
    for entry in annual {
        match peak {
            Some(current) if entry.area_km2 <= current.area_km2 => {}
            _ => peak = Some(*entry),
        }
    }

    ConversionSummary {
        total_area_km2,
        peak,
    }
}
