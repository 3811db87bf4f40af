//! # Analysis Engine
//!
//! Session-scoped components for the proximity search:
//! - `PoiStore` - owns the loaded point-of-interest dataset
//! - `ProximityIndex` - haversine k-nearest-neighbor index
//! - `AnalysisSession` - explicit session context tying dataset, active
//!   filter and index together
//!
//! The session replaces the ambient page-level cache of the original
//! dashboard: state lives in one object with a clear create/replace
//! lifecycle tied to filter changes.

pub mod poi_store;
pub mod proximity_index;

pub use poi_store::PoiStore;
pub use proximity_index::ProximityIndex;

use log::info;

use crate::error::{OptionExt, Result};
use crate::{CategoryFilter, GeoPoint, Neighbor, PointOfInterest};

/// Explicit session context for proximity queries.
///
/// Owns the full dataset, the active category filter, and the index built
/// over the current working subset. Changing the filter builds the
/// replacement index completely before the old one is dropped, so a query
/// never observes a partially built structure.
#[derive(Debug)]
pub struct AnalysisSession {
    store: PoiStore,
    filter: CategoryFilter,
    index: Option<ProximityIndex>,
}

impl AnalysisSession {
    /// Create a session over the full dataset, with no category filter.
    pub fn new(points: Vec<PointOfInterest>) -> Self {
        Self::with_filter(points, CategoryFilter::All)
    }

    /// Create a session with an initial category filter.
    pub fn with_filter(points: Vec<PointOfInterest>, filter: CategoryFilter) -> Self {
        let store = PoiStore::new(points);
        let index = Self::build_index(&store, filter);
        Self {
            store,
            filter,
            index,
        }
    }

    /// Build an index over the working subset; `None` when the subset is
    /// empty (queries then report the empty working set).
    fn build_index(store: &PoiStore, filter: CategoryFilter) -> Option<ProximityIndex> {
        let subset = store.subset(filter);
        let subset_len = subset.len();
        let index = ProximityIndex::build(subset).ok();
        info!(
            "working set for {:?}: {} of {} points",
            filter,
            subset_len,
            store.len()
        );
        index
    }

    /// Replace the active category filter, rebuilding the index over the
    /// new working subset. A no-op when the filter is unchanged.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if filter == self.filter {
            return;
        }
        let index = Self::build_index(&self.store, filter);
        self.filter = filter;
        self.index = index;
    }

    /// The active category filter.
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// The full loaded dataset.
    pub fn store(&self) -> &PoiStore {
        &self.store
    }

    /// Number of points in the current working subset.
    pub fn working_set_len(&self) -> usize {
        self.index.as_ref().map_or(0, ProximityIndex::len)
    }

    /// Find the k nearest points of the working subset to a query point.
    ///
    /// Fails with `EmptyIndex` when the working subset is empty, which
    /// callers surface as "no matching points".
    pub fn find_nearest(&self, latitude: f64, longitude: f64, k: usize) -> Result<Vec<Neighbor>> {
        let index = self.index.as_ref().ok_or_empty_index()?;
        index.k_nearest(latitude, longitude, k)
    }

    /// Distance in meters from a query point to the nearest point of the
    /// working subset.
    pub fn nearest_distance(&self, point: &GeoPoint) -> Result<f64> {
        let index = self.index.as_ref().ok_or_empty_index()?;
        index.nearest_distance(point)
    }

    /// Batch form of [`AnalysisSession::nearest_distance`].
    pub fn nearest_distances(&self, queries: &[GeoPoint]) -> Result<Vec<f64>> {
        let index = self.index.as_ref().ok_or_empty_index()?;
        index.nearest_distances(queries)
    }
}
