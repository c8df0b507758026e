//! Line segment intersection with a fixed policy for degenerate cases

use crate::types::Coordinate;

/// A line segment between two planar points
///
/// `x` is longitude and `y` is latitude, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Segment {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    fn min_x(&self) -> f64 {
        self.start.lon.min(self.end.lon)
    }

    fn max_x(&self) -> f64 {
        self.start.lon.max(self.end.lon)
    }

    fn min_y(&self) -> f64 {
        self.start.lat.min(self.end.lat)
    }

    fn max_y(&self) -> f64 {
        self.start.lat.max(self.end.lat)
    }

    fn is_vertical(&self) -> bool {
        self.start.lon == self.end.lon
    }

    /// Slope and y-intercept of the line through the segment
    ///
    /// Only meaningful for non-vertical segments.
    fn line(&self) -> (f64, f64) {
        let slope = (self.start.lat - self.end.lat) / (self.start.lon - self.end.lon);
        let intercept = self.start.lat - slope * self.start.lon;
        (slope, intercept)
    }

    /// Whether a vertical segment meets the x-range and y-range of `other`
    fn vertical_meets(&self, other: &Segment) -> bool {
        let x = self.start.lon;
        let within_x = other.min_x() <= x && x <= other.max_x();
        let disjoint_y = self.min_y() > other.max_y() || self.max_y() < other.min_y();
        within_x && !disjoint_y
    }
}

/// Check whether two segments cross
///
/// Degenerate cases are resolved as follows:
///
/// 1. Segments with any identical endpoints (the four endpoints collapse to
///    fewer than four distinct points) do not intersect.
/// 2. If `first` lies entirely left of `second` they do not intersect. The
///    check is one-sided.
/// 3. Two vertical segments do not intersect, even when they overlap.
/// 4. A vertical segment intersects the other one if its x lies within the
///    other's x-range and their y-ranges are not disjoint.
/// 5. Parallel segments do not intersect, collinear overlapping ones included.
/// 6. Otherwise the segments intersect if the crossing point of their lines
///    lies within the x-ranges of both.
pub fn intersects(first: &Segment, second: &Segment) -> bool {
    let endpoints = [first.start, first.end, second.start, second.end];
    for (i, a) in endpoints.iter().enumerate() {
        if endpoints[i + 1..].contains(a) {
            return false;
        }
    }

    if first.max_x() < second.min_x() {
        return false;
    }

    match (first.is_vertical(), second.is_vertical()) {
        (true, true) => return false,
        (true, false) => return first.vertical_meets(second),
        (false, true) => return second.vertical_meets(first),
        (false, false) => {}
    }

    let (slope1, intercept1) = first.line();
    let (slope2, intercept2) = second.line();
    if slope1 == slope2 {
        return false;
    }

    let x = (intercept2 - intercept1) / (slope1 - slope2);

    let lower = first.min_x().max(second.min_x());
    let upper = first.max_x().min(second.max_x());
    lower <= x && x <= upper
}
