use crate::types::{BoundaryPoint, Coordinate};

/// Bounding box for geographic areas
///
/// Represents a rectangular geographic area defined by longitude and latitude bounds.
/// All coordinates are stored in degrees.
///
/// A coordinate outside the box is guaranteed to be outside of the ring the
/// box was built from. The reverse does not hold.
///
/// # Limitations
///
/// **Anti-meridian handling**: This implementation does not correctly handle areas
/// crossing the ±180° longitude line (anti-meridian). Simple min/max logic is used,
/// which will produce incorrect results for such regions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub left: f64,   // west longitude (degrees)
    pub top: f64,    // north latitude (degrees)
    pub right: f64,  // east longitude (degrees)
    pub bottom: f64, // south latitude (degrees)
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[BoundaryPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bbox = Self::from(first.coordinate());
        for point in rest {
            bbox.extend(point.coordinate());
        }
        Some(bbox)
    }

    /// Extend bounding box to include a coordinate
    ///
    /// Grows the bounding box if necessary to encompass the given coordinate.
    /// If the coordinate is already inside the bbox, no change is made.
    pub fn extend(&mut self, coordinate: Coordinate) {
        self.left = self.left.min(coordinate.lon);
        self.right = self.right.max(coordinate.lon);
        self.top = self.top.max(coordinate.lat);
        self.bottom = self.bottom.min(coordinate.lat);
    }

    /// Check whether a coordinate lies strictly outside of the box
    ///
    /// Coordinates on the edges or corners of the box count as inside.
    pub fn is_outside(&self, coordinate: Coordinate) -> bool {
        coordinate.lon < self.left
            || coordinate.lon > self.right
            || coordinate.lat < self.bottom
            || coordinate.lat > self.top
    }

    /// Check whether a coordinate lies inside the box or on its edges
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        !self.is_outside(coordinate)
    }
}

impl From<Coordinate> for BoundingBox {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            left: coordinate.lon,
            top: coordinate.lat,
            right: coordinate.lon,
            bottom: coordinate.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some};

    fn point(id: u32, lon: f64, lat: f64) -> BoundaryPoint {
        BoundaryPoint::new(id, lon, lat)
    }

    #[test]
    fn test_from_coordinate() {
        // Kremlin: 55.7520°N, 37.6175°E
        let bbox = BoundingBox::from(Coordinate::new(37.6175, 55.752));

        // All bounds should equal the coordinate
        assert_eq!(bbox.left, 37.6175);
        assert_eq!(bbox.top, 55.752);
        assert_eq!(bbox.right, 37.6175);
        assert_eq!(bbox.bottom, 55.752);
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<BoundaryPoint> = vec![];
        assert_none!(BoundingBox::from_points(&points));
    }

    #[test]
    fn test_from_points_single() {
        let points = vec![point(1, 0.5, 0.5)];
        let bbox = assert_some!(BoundingBox::from_points(&points));

        assert_eq!(bbox.left, 0.5);
        assert_eq!(bbox.top, 0.5);
        assert_eq!(bbox.right, 0.5);
        assert_eq!(bbox.bottom, 0.5);
    }

    #[test]
    fn test_from_points_multiple() {
        let points = vec![
            point(1, 0.5, 0.5), // Center (lon, lat)
            point(2, 0.2, 0.8), // North + West
            point(3, 0.9, 0.2), // South + East
            point(4, 0.1, 0.9), // North + West
        ];
        let bbox = assert_some!(BoundingBox::from_points(&points));

        assert_eq!(bbox.left, 0.1); // Westmost
        assert_eq!(bbox.top, 0.9); // Northmost
        assert_eq!(bbox.right, 0.9); // Eastmost
        assert_eq!(bbox.bottom, 0.2); // Southmost
    }

    #[test]
    fn test_extend_multiple_directions() {
        let mut bbox = BoundingBox::from(Coordinate::new(0.5, 0.5));

        bbox.extend(Coordinate::new(0.8, 0.8)); // NE
        bbox.extend(Coordinate::new(0.2, 0.2)); // SW
        bbox.extend(Coordinate::new(0.1, 0.9)); // NW

        assert_eq!(bbox.left, 0.1);
        assert_eq!(bbox.top, 0.9);
        assert_eq!(bbox.right, 0.8);
        assert_eq!(bbox.bottom, 0.2);
    }

    #[test]
    fn test_extend_with_coordinate_inside_bbox() {
        let mut bbox = BoundingBox {
            left: 0.0,
            top: 1.0,
            right: 1.0,
            bottom: 0.0,
        };

        // Extend with coordinate inside - should not change bounds
        bbox.extend(Coordinate::new(0.5, 0.5));

        assert_eq!(bbox.left, 0.0);
        assert_eq!(bbox.top, 1.0);
        assert_eq!(bbox.right, 1.0);
        assert_eq!(bbox.bottom, 0.0);
    }

    #[test]
    fn test_corners_and_edges_are_inside() {
        let bbox = BoundingBox {
            left: 37.0,
            top: 56.0,
            right: 38.0,
            bottom: 55.0,
        };

        assert!(!bbox.is_outside(Coordinate::new(37.0, 56.0)));
        assert!(!bbox.is_outside(Coordinate::new(38.0, 56.0)));
        assert!(!bbox.is_outside(Coordinate::new(37.0, 55.0)));
        assert!(!bbox.is_outside(Coordinate::new(38.0, 55.0)));

        assert!(!bbox.is_outside(Coordinate::new(37.5, 55.0)));
        assert!(!bbox.is_outside(Coordinate::new(38.0, 55.5)));
        assert!(bbox.contains(Coordinate::new(37.5, 55.5)));
    }

    #[test]
    fn test_outside() {
        let bbox = BoundingBox {
            left: 37.0,
            top: 56.0,
            right: 38.0,
            bottom: 55.0,
        };

        assert!(bbox.is_outside(Coordinate::new(36.999, 55.5))); // west
        assert!(bbox.is_outside(Coordinate::new(38.001, 55.5))); // east
        assert!(bbox.is_outside(Coordinate::new(37.5, 56.001))); // north
        assert!(bbox.is_outside(Coordinate::new(37.5, 54.999))); // south

        // Budapest
        assert!(bbox.is_outside(Coordinate::new(19.092281, 47.516581)));
        assert!(!bbox.contains(Coordinate::new(19.092281, 47.516581)));
    }
}
