//! Synthetic POI dataset generator for benchmarking and cross-check
//! tests.
//!
//! Generates seeded, reproducible point sets scattered around a city
//! center, so brute-force comparisons and benchmarks run on
//! deterministic input.
//!
//! # Example
//!
//! ```rust
//! use greenreach::synthetic::PoiScenario;
//!
//! let scenario = PoiScenario {
//!     count: 500,
//!     seed: 42,
//!     ..PoiScenario::default()
//! };
//!
//! let dataset = scenario.generate();
//! assert_eq!(dataset.len(), 500);
//! assert_eq!(dataset, scenario.generate());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{GeoPoint, PoiCategory, PointOfInterest};

/// Configuration for a generated POI set.
#[derive(Debug, Clone)]
pub struct PoiScenario {
    /// City center the points scatter around.
    pub center: GeoPoint,
    /// Number of points to generate.
    pub count: usize,
    /// Approximate scatter radius in kilometers.
    pub spread_km: f64,
    /// RNG seed; equal seeds produce identical datasets.
    pub seed: u64,
}

impl Default for PoiScenario {
    fn default() -> Self {
        Self {
            // Delhi
            center: GeoPoint::new(28.6139, 77.2090),
            count: 1_000,
            spread_km: 25.0,
            seed: 42,
        }
    }
}

impl PoiScenario {
    /// Generate the point set described by this scenario.
    pub fn generate(&self) -> Vec<PointOfInterest> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let spread_deg = self.spread_km * 1_000.0 / 111_320.0;
        let lng_scale = self.center.latitude.to_radians().cos().max(0.1);

        (0..self.count)
            .map(|i| {
                let lat = self.center.latitude + rng.gen_range(-spread_deg..spread_deg);
                let lng =
                    self.center.longitude + rng.gen_range(-spread_deg..spread_deg) / lng_scale;
                let category = PoiCategory::ALL[rng.gen_range(0..PoiCategory::ALL.len())];
                PointOfInterest::new(format!("poi-{}", i), category, lat, lng)
            })
            .collect()
    }
}
