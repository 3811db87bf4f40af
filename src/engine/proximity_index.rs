//! Haversine k-nearest-neighbor index over points of interest.
//!
//! Coordinates are converted from degrees once at build time: first to
//! radians, then to unit vectors on the sphere. Chord distance between
//! unit vectors is monotone in the central angle, so an R-tree ordered by
//! squared Euclidean distance yields exactly the great-circle ordering;
//! chord lengths are mapped back to arc meters only when results are
//! returned.

use log::debug;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{GreenreachError, Result};
use crate::geo_utils::{chord_sq_to_arc_m, unit_vector};
use crate::{GeoPoint, Neighbor, PointOfInterest};

/// Below this many points a plain scan beats the tree. Both backends
/// apply the same distance and tie policy, so results are identical.
const LINEAR_SCAN_THRESHOLD: usize = 64;

/// Distances within this tolerance (meters) are treated as equal and
/// ordered by original insertion position, first inserted winning.
const TIE_TOLERANCE_M: f64 = 1e-6;

/// A point of interest projected onto the unit sphere, tagged with its
/// position in the source collection.
#[derive(Debug, Clone, Copy)]
struct IndexedPoi {
    idx: usize,
    pos: [f64; 3],
}

impl RTreeObject for IndexedPoi {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.pos)
    }
}

impl PointDistance for IndexedPoi {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        chord_sq(&self.pos, point)
    }
}

fn chord_sq(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

#[derive(Debug)]
enum Backend {
    /// Brute-force scan over all positions.
    Linear,
    /// Bulk-loaded R-tree over the unit-sphere positions.
    Tree(RTree<IndexedPoi>),
}

/// Spatial index answering "which k points are closest to a query point,
/// and how far" under great-circle distance.
///
/// The index is immutable once built and reflects exactly the subset it
/// was built from; when the working subset changes, a new index must be
/// built (see `AnalysisSession::set_filter`). Queries take `&self` and
/// perform no internal mutation.
#[derive(Debug)]
pub struct ProximityIndex {
    points: Vec<PointOfInterest>,
    positions: Vec<[f64; 3]>,
    backend: Backend,
}

impl ProximityIndex {
    /// Build an index over a working subset of points.
    ///
    /// Fails with `EmptyIndex` for an empty subset: building an index
    /// over zero points is rejected here, not deferred to query time.
    pub fn build(points: Vec<PointOfInterest>) -> Result<Self> {
        if points.is_empty() {
            return Err(GreenreachError::EmptyIndex);
        }

        let positions: Vec<[f64; 3]> = points
            .iter()
            .map(|p| unit_vector(p.location.latitude, p.location.longitude))
            .collect();

        let backend = if points.len() < LINEAR_SCAN_THRESHOLD {
            Backend::Linear
        } else {
            let indexed = positions
                .iter()
                .enumerate()
                .map(|(idx, &pos)| IndexedPoi { idx, pos })
                .collect();
            Backend::Tree(RTree::bulk_load(indexed))
        };

        debug!(
            "built proximity index over {} points ({})",
            points.len(),
            match backend {
                Backend::Linear => "linear scan",
                Backend::Tree(_) => "r-tree",
            }
        );

        Ok(Self {
            points,
            positions,
            backend,
        })
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: an index cannot be built over zero points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The indexed points, in their original insertion order.
    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    /// Find the k nearest indexed points to a query coordinate.
    ///
    /// Returns exactly `min(k, N)` entries in ascending distance order;
    /// k larger than the index size is clamped, never an error. Equal
    /// distances order by original insertion position.
    ///
    /// Distances are in meters.
    pub fn k_nearest(&self, latitude: f64, longitude: f64, k: usize) -> Result<Vec<Neighbor>> {
        if !GeoPoint::new(latitude, longitude).is_valid() {
            return Err(GreenreachError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        if k == 0 {
            return Err(GreenreachError::InvalidK { k });
        }

        let k = k.min(self.points.len());
        let query = unit_vector(latitude, longitude);

        let mut candidates = match &self.backend {
            Backend::Linear => self.scan_candidates(&query),
            Backend::Tree(tree) => tree_candidates(tree, &query, k),
        };

        candidates.sort_by(|a, b| {
            if (a.1 - b.1).abs() <= TIE_TOLERANCE_M {
                a.0.cmp(&b.0)
            } else {
                a.1.total_cmp(&b.1)
            }
        });
        candidates.truncate(k);

        Ok(candidates
            .into_iter()
            .map(|(idx, distance_m)| Neighbor {
                poi: self.points[idx].clone(),
                distance_m,
            })
            .collect())
    }

    /// Distance in meters from a query point to its nearest indexed point.
    pub fn nearest_distance(&self, point: &GeoPoint) -> Result<f64> {
        let nearest = self.k_nearest(point.latitude, point.longitude, 1)?;
        Ok(nearest[0].distance_m)
    }

    /// Distance in meters from each query point to its nearest indexed
    /// point (the accessibility measure of the dashboard).
    pub fn nearest_distances(&self, queries: &[GeoPoint]) -> Result<Vec<f64>> {
        queries.iter().map(|q| self.nearest_distance(q)).collect()
    }

    /// Parallel form of [`ProximityIndex::nearest_distances`].
    #[cfg(feature = "parallel")]
    pub fn nearest_distances_parallel(&self, queries: &[GeoPoint]) -> Result<Vec<f64>> {
        queries
            .par_iter()
            .map(|q| self.nearest_distance(q))
            .collect()
    }

    /// All points with their distance to the query, unsorted.
    fn scan_candidates(&self, query: &[f64; 3]) -> Vec<(usize, f64)> {
        self.positions
            .iter()
            .enumerate()
            .map(|(idx, pos)| (idx, chord_sq_to_arc_m(chord_sq(pos, query))))
            .collect()
    }
}

/// Pull the k nearest tree entries plus any further entries tied with the
/// k-th, so the insertion-order tie rule sees every equally distant point.
fn tree_candidates(tree: &RTree<IndexedPoi>, query: &[f64; 3], k: usize) -> Vec<(usize, f64)> {
    let mut out: Vec<(usize, f64)> = Vec::with_capacity(k + 1);
    let mut cutoff = f64::INFINITY;

    // The iterator yields entries in ascending distance order.
    for (item, dist_sq) in tree.nearest_neighbor_iter_with_distance_2(query) {
        let distance_m = chord_sq_to_arc_m(dist_sq);
        if out.len() >= k && distance_m > cutoff + TIE_TOLERANCE_M {
            break;
        }
        out.push((item.idx, distance_m));
        if out.len() == k {
            cutoff = distance_m;
        }
    }

    out
}
