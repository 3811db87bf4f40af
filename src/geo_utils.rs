//! Geographic utilities (distance, bounds, center calculations).

use crate::{Bounds, GeoPoint};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters, using the
/// haversine formula.
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Project a latitude/longitude pair (degrees) onto the unit sphere.
///
/// Chord distance between unit vectors is monotone in the central angle,
/// so Euclidean nearest-neighbor order over these vectors equals
/// great-circle order.
pub fn unit_vector(latitude: f64, longitude: f64) -> [f64; 3] {
    let lat = latitude.to_radians();
    let lng = longitude.to_radians();
    [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
}

/// Convert a squared chord length between unit vectors to great-circle
/// arc length in meters.
pub fn chord_sq_to_arc_m(chord_sq: f64) -> f64 {
    let half_chord = chord_sq.max(0.0).sqrt() / 2.0;
    2.0 * half_chord.clamp(0.0, 1.0).asin() * EARTH_RADIUS_M
}

/// Compute the bounding box of a set of points.
///
/// Returns a zeroed box for an empty set.
pub fn compute_bounds(points: &[GeoPoint]) -> Bounds {
    Bounds::from_points(points).unwrap_or(Bounds {
        min_lat: 0.0,
        max_lat: 0.0,
        min_lng: 0.0,
        max_lng: 0.0,
    })
}

/// Compute the center of a set of points (center of its bounding box).
///
/// Returns the origin for an empty set.
pub fn compute_center(points: &[GeoPoint]) -> GeoPoint {
    compute_bounds(points).center()
}

/// Approximate conversion from meters to longitude degrees at a given
/// latitude. One degree of longitude spans ~111,320 m at the equator and
/// shrinks with the cosine of latitude.
pub fn meters_to_degrees(meters: f64, latitude: f64) -> f64 {
    meters / (111_320.0 * latitude.to_radians().cos().abs().max(0.01))
}
