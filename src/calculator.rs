//! High-level distance calculator

use crate::error::{Error, Result, Warning};
use crate::ring::RingGeometry;
use crate::types::{BoundaryPoint, Coordinate, Evaluation};

/// Classifies coordinates against a ring and measures how far outside they are
///
/// All derived geometry is computed once on construction. Evaluation only
/// reads it, so a single calculator can be shared by reference across any
/// number of threads.
///
/// # Example
///
/// ```
/// use mkad_distance::{Coordinate, DistanceCalculator, Evaluation};
///
/// let calculator = DistanceCalculator::mkad()?;
///
/// // Red Square
/// let evaluation = calculator.evaluate(Coordinate::new(37.6208, 55.7539));
/// assert_eq!(evaluation, Evaluation::Inside);
///
/// // Zelenograd
/// let evaluation = calculator.evaluate(Coordinate::new(37.194, 55.987));
/// assert!(evaluation.distance_km().is_some());
/// # Ok::<(), mkad_distance::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DistanceCalculator {
    ring: RingGeometry,
}

impl DistanceCalculator {
    /// Create a calculator for the given ring
    ///
    /// Non-fatal issues with the ring are logged as warnings.
    pub fn new<P: Into<BoundaryPoint>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        let ring = RingGeometry::new(points.into_iter().map(Into::into).collect())?;
        Ok(Self { ring })
    }

    /// Create a calculator for the given ring, collecting non-fatal issues
    pub fn with_warnings<P: Into<BoundaryPoint>>(
        points: impl IntoIterator<Item = P>,
        warnings: &mut Vec<Warning>,
    ) -> Result<Self> {
        let points = points.into_iter().map(Into::into).collect();
        let ring = RingGeometry::with_warnings(points, warnings)?;
        Ok(Self { ring })
    }

    /// Create a calculator for the bundled Moscow Ring Road boundary
    #[cfg(feature = "mkad")]
    pub fn mkad() -> Result<Self> {
        Self::new(crate::mkad::MKAD_KM)
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.ring
    }

    /// Check whether a coordinate lies inside the ring
    pub fn is_inside(&self, coordinate: Coordinate) -> bool {
        self.ring.contains(coordinate)
    }

    /// Great-circle distance in kilometers to the nearest boundary point
    ///
    /// This is measured regardless of whether the coordinate is inside.
    pub fn min_distance_km(&self, coordinate: Coordinate) -> f64 {
        self.ring.min_distance_km(coordinate)
    }

    /// Classify a coordinate and measure its distance if it is outside
    pub fn evaluate(&self, coordinate: Coordinate) -> Evaluation {
        let evaluation = if self.is_inside(coordinate) {
            Evaluation::Inside
        } else {
            Evaluation::Outside {
                distance_km: self.min_distance_km(coordinate),
            }
        };

        log::trace!("Evaluated {coordinate:?}: {evaluation:?}");
        evaluation
    }

    /// Like [`evaluate()`](Self::evaluate), but rejects coordinates that are
    /// not finite or out of the valid longitude/latitude range
    pub fn try_evaluate(&self, coordinate: Coordinate) -> Result<Evaluation> {
        if !coordinate.is_valid() {
            return Err(Error::CoordinateOutOfRange { point: coordinate });
        }
        Ok(self.evaluate(coordinate))
    }
}
