//! Derived geometry of the closed boundary ring

use crate::angle::{AngleTable, bearing};
use crate::distance::min_distance_km;
use crate::error::{Error, Result, Warning};
use crate::segment::{Segment, intersects};
use crate::types::{BoundaryPoint, BoundingBox, Coordinate};

/// Immutable geometry derived once from the ordered boundary points
///
/// The ring is implicitly closed (the last point connects back to the first)
/// and is expected to enclose its own centroid.
///
/// # Limitations
///
/// Containment is decided with a single bracketing segment: the ray from the
/// centroid towards a coordinate is only tested against the boundary segment
/// between the two angularly nearest points. This is exact only for rings
/// that are star-shaped with respect to their centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    points: Vec<BoundaryPoint>,
    centroid: Coordinate,
    bounding_box: BoundingBox,
    angle_table: AngleTable,
}

impl RingGeometry {
    /// Build the ring geometry, logging any non-fatal issues
    pub fn new(points: Vec<BoundaryPoint>) -> Result<Self> {
        let mut warnings = Vec::new();
        let ring = Self::with_warnings(points, &mut warnings)?;
        for warning in &warnings {
            log::warn!("Ring geometry: {warning:?}");
        }
        Ok(ring)
    }

    /// Build the ring geometry
    ///
    /// Fails with [`Error::InvalidRing`] for fewer than 3 points and with
    /// [`Error::CoordinateOutOfRange`] for points that are not valid
    /// coordinates. Non-fatal issues are pushed to `warnings`.
    pub fn with_warnings(points: Vec<BoundaryPoint>, warnings: &mut Vec<Warning>) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::InvalidRing { len: points.len() });
        }

        if let Some(point) = points.iter().find(|p| !p.coordinate().is_valid()) {
            return Err(Error::CoordinateOutOfRange {
                point: point.coordinate(),
            });
        }

        let Some(bounding_box) = BoundingBox::from_points(&points) else {
            return Err(Error::InvalidRing { len: points.len() });
        };

        let count = points.len() as f64;
        let centroid = Coordinate::new(
            points.iter().map(|p| p.lon).sum::<f64>() / count,
            points.iter().map(|p| p.lat).sum::<f64>() / count,
        );

        for (i, point) in points.iter().enumerate() {
            if let Some(earlier) = points[..i]
                .iter()
                .find(|other| other.coordinate() == point.coordinate())
            {
                warnings.push(Warning::DuplicatePoint {
                    id: point.id,
                    duplicate_of: earlier.id,
                });
            }

            if point.coordinate() == centroid {
                warnings.push(Warning::UndefinedBearing { id: point.id });
            }
        }

        let angle_table = AngleTable::build(&points, centroid);

        log::debug!(
            "Ring geometry ready: {} points, centroid {centroid:?}, {bounding_box:?}",
            points.len()
        );

        Ok(Self {
            points,
            centroid,
            bounding_box,
            angle_table,
        })
    }

    /// Boundary points in their original order
    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    /// Arithmetic mean of all boundary points
    pub fn centroid(&self) -> Coordinate {
        self.centroid
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn angle_table(&self) -> &AngleTable {
        &self.angle_table
    }

    /// Check whether a coordinate lies inside the ring
    ///
    /// Boundary points and the centroid count as inside.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        if !self.bounding_box.contains(coordinate) {
            return false;
        }

        let angle = bearing(coordinate, self.centroid);
        let Some((higher, lower)) = self.angle_table.nearest_pair(angle) else {
            return false;
        };

        let ray = Segment::new(coordinate, self.centroid);
        let boundary = Segment::new(higher.coordinate(), lower.coordinate());
        !intersects(&ray, &boundary)
    }

    /// Great-circle distance in kilometers to the nearest boundary point
    pub fn min_distance_km(&self, coordinate: Coordinate) -> f64 {
        min_distance_km(coordinate, &self.points).unwrap_or(f64::INFINITY)
    }
}
