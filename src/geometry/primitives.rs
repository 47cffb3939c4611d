//! Planar predicates on coordinates.
//!
//! All predicates work in the longitude/latitude plane (x = longitude,
//! y = latitude). Service areas span a few kilometers at most, so treating
//! degrees as planar units is accurate enough for intersection tests.

use crate::constants::DEFAULT_COLLINEAR_EPSILON;
use crate::model::{Coordinate, Polygon};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    /// True when both are strict turns in opposite directions.
    #[inline]
    pub fn is_opposite(self, other: Orientation) -> bool {
        matches!(
            (self, other),
            (Orientation::Clockwise, Orientation::CounterClockwise)
                | (Orientation::CounterClockwise, Orientation::Clockwise)
        )
    }
}

/// Collinearity tolerance applied to raw orientation values.
///
/// Values with magnitude at or below `epsilon` classify as collinear.
/// `Tolerance::EXACT` only treats an exact zero as collinear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Exact floating-point comparison against zero.
    pub const EXACT: Tolerance = Tolerance { epsilon: 0.0 };

    /// Create a tolerance. Negative or NaN inputs become 0.
    pub fn new(epsilon: f64) -> Self {
        let epsilon = if epsilon.is_nan() { 0.0 } else { epsilon.abs() };
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Classify a raw [`orientation`] value.
    #[inline]
    pub fn classify(&self, value: f64) -> Orientation {
        if value > self.epsilon {
            Orientation::Clockwise
        } else if value < -self.epsilon {
            Orientation::CounterClockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Orientation of `p1, p2, p3` classified with this tolerance.
    #[inline]
    pub fn orient(&self, p1: Coordinate, p2: Coordinate, p3: Coordinate) -> Orientation {
        self.classify(orientation(p1, p2, p3))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_COLLINEAR_EPSILON)
    }
}

/// Cross product of `p1→p3` and `p1→p2`.
///
/// Positive for a clockwise turn `p1 → p2 → p3`, negative for counter-clockwise,
/// zero for collinear points.
#[inline]
pub fn orientation(p1: Coordinate, p2: Coordinate, p3: Coordinate) -> f64 {
    (p3.x() - p1.x()) * (p2.y() - p1.y()) - (p2.x() - p1.x()) * (p3.y() - p1.y())
}

/// Whether `q` lies inside the bounding box of segment `p`–`r`.
///
/// Only meaningful when the three points are already known to be collinear.
#[inline]
fn on_segment(p: Coordinate, q: Coordinate, r: Coordinate) -> bool {
    q.x() <= p.x().max(r.x())
        && q.x() >= p.x().min(r.x())
        && q.y() <= p.y().max(r.y())
        && q.y() >= p.y().min(r.y())
}

/// Check whether segment `a1`–`a2` intersects segment `b1`–`b2`.
///
/// Touching endpoints and collinear overlap count as intersections.
pub fn segments_intersect(
    a1: Coordinate,
    a2: Coordinate,
    b1: Coordinate,
    b2: Coordinate,
    tolerance: Tolerance,
) -> bool {
    let d1 = tolerance.orient(b1, b2, a1);
    let d2 = tolerance.orient(b1, b2, a2);
    let d3 = tolerance.orient(a1, a2, b1);
    let d4 = tolerance.orient(a1, a2, b2);

    if d1.is_opposite(d2) && d3.is_opposite(d4) {
        return true;
    }

    (d1 == Orientation::Collinear && on_segment(b1, a1, b2))
        || (d2 == Orientation::Collinear && on_segment(b1, a2, b2))
        || (d3 == Orientation::Collinear && on_segment(a1, b1, a2))
        || (d4 == Orientation::Collinear && on_segment(a1, b2, a2))
}

/// Check if a point is inside the polygon (ray casting algorithm).
///
/// Points exactly on the boundary may land on either side.
pub fn point_in_polygon(point: Coordinate, polygon: &Polygon) -> bool {
    let vertices = polygon.vertices();
    if vertices.len() < 3 {
        return false;
    }

    let (x, y) = (point.x(), point.y());
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].x(), vertices[i].y());
        let (xj, yj) = (vertices[j].x(), vertices[j].y());
        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}
