//! Great-circle distances

use crate::types::{BoundaryPoint, Coordinate};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two coordinates in kilometers
///
/// Uses the haversine formula on a sphere with [`EARTH_RADIUS_KM`].
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Smallest great-circle distance from `coordinate` to any of `points`
///
/// Every point is evaluated. Returns `None` if `points` is empty.
pub fn min_distance_km(coordinate: Coordinate, points: &[BoundaryPoint]) -> Option<f64> {
    points
        .iter()
        .map(|point| haversine_km(coordinate, point.coordinate()))
        .min_by(f64::total_cmp)
}
