/// A geographic position in degrees
///
/// Used both for query inputs and for the centroid of the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Check that both components are finite and within the valid
    /// longitude (±180°) and latitude (±90°) ranges
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Convert a `(lon, lat)` tuple
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

/// A single point of the ring boundary
///
/// The `id` is the kilometer marker of the point along the road. Markers are
/// not required to be contiguous or sorted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryPoint {
    pub id: u32,
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

impl BoundaryPoint {
    pub fn new(id: u32, lon: f64, lat: f64) -> Self {
        Self { id, lon, lat }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }
}

impl From<(u32, f64, f64)> for BoundaryPoint {
    /// Convert an `(id, lon, lat)` triple
    fn from((id, lon, lat): (u32, f64, f64)) -> Self {
        Self::new(id, lon, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(37.615561, 55.741469).is_valid());

        // extremes
        assert!(Coordinate::new(-180.0, -90.0).is_valid());
        assert!(Coordinate::new(180.0, 90.0).is_valid());
    }

    #[test]
    fn test_out_of_range() {
        assert!(!Coordinate::new(180.5, 0.0).is_valid());
        assert!(!Coordinate::new(-181.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 90.1).is_valid());
        assert!(!Coordinate::new(0.0, -91.0).is_valid());
    }

    #[test]
    fn test_non_finite() {
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
        assert!(!Coordinate::new(f64::INFINITY, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NEG_INFINITY).is_valid());
    }

    #[test]
    fn test_from_tuples() {
        let coordinate = Coordinate::from((37.5, 55.7));
        assert_eq!(coordinate, Coordinate::new(37.5, 55.7));

        let point = BoundaryPoint::from((12, 37.5, 55.7));
        assert_eq!(point.id, 12);
        assert_eq!(point.coordinate(), coordinate);
    }
}
