use crate::types::Coordinate;

/// Unrecoverable errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Ring needs at least 3 boundary points, got {len}")]
    InvalidRing { len: usize },

    #[error("Coordinate out of range: {point:?}")]
    CoordinateOutOfRange { point: Coordinate },
}

/// Non-fatal issues encountered while building the ring geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Boundary point coincides with the centroid, bearing 0° used instead
    UndefinedBearing { id: u32 },

    /// Boundary point has the exact coordinates of an earlier point
    DuplicatePoint { id: u32, duplicate_of: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = Error::InvalidRing { len: 2 };
        assert_eq!(
            error.to_string(),
            "Ring needs at least 3 boundary points, got 2"
        );

        let error = Error::CoordinateOutOfRange {
            point: Coordinate::new(200.0, 10.0),
        };
        assert_eq!(
            error.to_string(),
            "Coordinate out of range: Coordinate { lon: 200.0, lat: 10.0 }"
        );
    }
}
