//! Bearings around the ring centroid and the sorted angle table

use crate::types::{BoundaryPoint, Coordinate};

/// Bearing of `point` as seen from `center`, in degrees within `[0, 360)`
///
/// 0° points along the positive longitude axis and the angle grows
/// counter-clockwise in (longitude, latitude) space. This is a planar angle
/// on raw degrees, not a compass bearing.
///
/// A point that coincides with `center` gets a bearing of 0°.
pub fn bearing(point: Coordinate, center: Coordinate) -> f64 {
    let degrees = (point.lat - center.lat)
        .atan2(point.lon - center.lon)
        .to_degrees();

    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// A boundary point together with its bearing from the centroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleEntry {
    pub bearing: f64,
    pub point: BoundaryPoint,
}

/// Boundary points sorted ascending by their bearing from the centroid
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTable {
    entries: Vec<AngleEntry>,
}

impl AngleTable {
    /// Compute the bearing of every point and sort by it
    ///
    /// The sort is stable, so points with identical bearings keep their
    /// input order.
    pub fn build(points: &[BoundaryPoint], center: Coordinate) -> Self {
        let mut entries = points
            .iter()
            .map(|&point| AngleEntry {
                bearing: bearing(point.coordinate(), center),
                point,
            })
            .collect::<Vec<_>>();

        entries.sort_by(|a, b| a.bearing.total_cmp(&b.bearing));

        Self { entries }
    }

    pub fn entries(&self) -> &[AngleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the two points whose bearings bracket `angle`
    ///
    /// Returns `(higher, lower)`: `higher` is the point with the smallest
    /// bearing `>= angle`, `lower` the one with the largest bearing `< angle`.
    /// Both wrap around the ends of the table, so an angle past the last
    /// bearing gets the first entry as `higher`, and an angle before the first
    /// bearing gets the last entry as `lower`.
    ///
    /// Returns `None` only for an empty table.
    pub fn nearest_pair(&self, angle: f64) -> Option<(BoundaryPoint, BoundaryPoint)> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;

        let index = self.entries.partition_point(|entry| entry.bearing < angle);

        let higher = self.entries.get(index).unwrap_or(first);
        let lower = match index {
            0 => last,
            _ => &self.entries[index - 1],
        };

        Some((higher.point, lower.point))
    }
}
