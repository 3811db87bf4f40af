//! # Greenreach
//!
//! Green-space accessibility analysis for a city region.
//!
//! This library provides:
//! - Nearest-green-space search over a point-of-interest dataset using
//!   great-circle (haversine) distance
//! - An explicit analysis session with category filtering and atomic
//!   index rebuilds
//! - Land-use/land-cover change summaries (MODIS class transitions)
//! - Seasonal NDVI vegetation-class trends
//! - Biodiversity proxy score comparisons
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel batch accessibility queries with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use greenreach::{PoiCategory, PointOfInterest};
//! use greenreach::engine::ProximityIndex;
//!
//! let parks = vec![
//!     PointOfInterest::new("Lodhi Garden", PoiCategory::ParkGarden, 28.5931, 77.2197),
//!     PointOfInterest::new("Deer Park", PoiCategory::ParkGarden, 28.5494, 77.1983),
//! ];
//!
//! let index = ProximityIndex::build(parks).unwrap();
//! let nearest = index.k_nearest(28.6139, 77.2090, 1).unwrap();
//! assert_eq!(nearest[0].poi.name, "Lodhi Garden");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{GreenreachError, OptionExt, Result};

// Geographic utilities (distance, bounds, center calculations)
pub mod geo_utils;

// Dataset loading (cleaned POI table, LULC change table)
pub mod dataset;
pub use dataset::{load_change_records, load_poi_dataset};

// Analysis engine: session context, POI store, proximity index
pub mod engine;
pub use engine::{AnalysisSession, PoiStore, ProximityIndex};

// Land-use/land-cover change analysis
pub mod lulc;

// Seasonal NDVI vegetation classification
pub mod ndvi;

// Biodiversity proxy score summaries
pub mod biodiversity;

// Synthetic dataset generation for benchmarks and cross-check tests
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate with latitude and longitude in degrees.
///
/// # Example
/// ```
/// use greenreach::GeoPoint;
/// let point = GeoPoint::new(28.6139, 77.2090); // Delhi
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Category of a green-space point of interest.
///
/// The source dataset carries free-text categories; parsing is total and
/// anything unrecognized lands in [`PoiCategory::Other`], so filtering is
/// exhaustive and typo-proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoiCategory {
    /// Maintained parks and gardens (`"Park/Garden"` in the source data).
    ParkGarden,
    Forest,
    Wetland,
    Grassland,
    /// Any category not recognized above.
    Other,
}

impl PoiCategory {
    /// All categories, in display order.
    pub const ALL: [PoiCategory; 5] = [
        PoiCategory::ParkGarden,
        PoiCategory::Forest,
        PoiCategory::Wetland,
        PoiCategory::Grassland,
        PoiCategory::Other,
    ];

    /// Parse a source-data category label. Unrecognized labels map to
    /// [`PoiCategory::Other`].
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        for category in Self::ALL {
            if label.eq_ignore_ascii_case(category.label()) {
                return category;
            }
        }
        PoiCategory::Other
    }

    /// The label used by the source dataset.
    pub fn label(&self) -> &'static str {
        match self {
            PoiCategory::ParkGarden => "Park/Garden",
            PoiCategory::Forest => "Forest",
            PoiCategory::Wetland => "Wetland",
            PoiCategory::Grassland => "Grassland",
            PoiCategory::Other => "Other",
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for PoiCategory {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

/// Selection of the active working subset for proximity search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// All green spaces, regardless of category.
    #[default]
    All,
    /// Only points of the given category.
    Only(PoiCategory),
}

impl CategoryFilter {
    /// Whether a point of the given category belongs to the working subset.
    pub fn matches(&self, category: PoiCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == *wanted,
        }
    }
}

/// A named green-space point of interest.
///
/// Identity is positional: a point is identified by its position in the
/// collection it was loaded into, not by an ID field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub category: PoiCategory,
    pub location: GeoPoint,
}

impl PointOfInterest {
    /// Create a new point of interest.
    pub fn new(
        name: impl Into<String>,
        category: PoiCategory,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            location: GeoPoint::new(latitude, longitude),
        }
    }
}

/// One entry of a proximity query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    /// The matched point of interest.
    pub poi: PointOfInterest,
    /// Great-circle distance from the query point in meters.
    pub distance_m: f64,
}

/// Bounding box over a set of geographic points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from geographic points.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}
