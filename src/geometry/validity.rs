//! Service-area validity checks: simplicity and overlap.

use serde::Serialize;

use super::primitives::{Tolerance, point_in_polygon, segments_intersect};
use crate::constants::MIN_POLYGON_VERTICES;
use crate::model::{Bounds, ExistingAreas, Polygon};

/// Check whether two non-adjacent edges of a closed ring cross anywhere.
///
/// Adjacent edges share a vertex and are skipped, including the pair formed
/// by the first and the closing edge. Fewer than 4 vertices can never
/// self-intersect under this definition.
pub fn has_self_intersection(polygon: &Polygon, tolerance: Tolerance) -> bool {
    let n = polygon.len();
    if n < 4 {
        return false;
    }

    let v = polygon.vertices();
    for i in 0..n {
        let (a1, a2) = (v[i], v[(i + 1) % n]);
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b1, b2) = (v[j], v[(j + 1) % n]);
            if segments_intersect(a1, a2, b1, b2, tolerance) {
                return true;
            }
        }
    }
    false
}

/// Incremental check for a polygon whose last vertex was just appended.
///
/// Only the two edges touched by the new vertex are tested: the one ending
/// at it and the implicit closing edge. Each is compared against every
/// non-adjacent edge. Assumes the polygon was simple before the append.
pub fn would_create_self_intersection(candidate: &Polygon, tolerance: Tolerance) -> bool {
    let n = candidate.len();
    if n < 4 {
        return false;
    }

    let v = candidate.vertices();
    let new_edge = (v[n - 2], v[n - 1]);
    let closing_edge = (v[n - 1], v[0]);

    // Edges 0..=n-4 do not touch the new edge's endpoints.
    let hits_new = (0..=n - 4).any(|j| {
        segments_intersect(new_edge.0, new_edge.1, v[j], v[j + 1], tolerance)
    });
    if hits_new {
        return true;
    }

    // Edges 1..=n-3 do not touch the closing edge's endpoints.
    (1..=n - 3).any(|j| {
        segments_intersect(closing_edge.0, closing_edge.1, v[j], v[j + 1], tolerance)
    })
}

/// Strictly separated bounds cannot share any point.
fn bounds_disjoint(a: &Bounds, b: &Bounds) -> bool {
    a.max.longitude < b.min.longitude
        || b.max.longitude < a.min.longitude
        || a.max.latitude < b.min.latitude
        || b.max.latitude < a.min.latitude
}

/// Check whether two polygons overlap.
///
/// True if a vertex of either lies inside the other, or if any pair of edges
/// intersect. The check is symmetric in its arguments.
pub fn polygons_overlap(a: &Polygon, b: &Polygon, tolerance: Tolerance) -> bool {
    match (a.bounds(), b.bounds()) {
        (Some(ba), Some(bb)) if !bounds_disjoint(&ba, &bb) => {}
        _ => return false,
    }

    if a.vertices().iter().any(|p| point_in_polygon(*p, b))
        || b.vertices().iter().any(|p| point_in_polygon(*p, a))
    {
        return true;
    }

    a.edges().any(|(a1, a2)| {
        b.edges()
            .any(|(b1, b2)| segments_intersect(a1, a2, b1, b2, tolerance))
    })
}

/// Check a polygon against every existing area.
pub fn overlaps_any(polygon: &Polygon, existing: &ExistingAreas, tolerance: Tolerance) -> bool {
    existing
        .iter()
        .any(|area| polygons_overlap(polygon, area, tolerance))
}

/// Indices of the existing areas a polygon overlaps.
pub fn overlapping_areas(
    polygon: &Polygon,
    existing: &ExistingAreas,
    tolerance: Tolerance,
) -> Vec<usize> {
    existing
        .iter()
        .enumerate()
        .filter(|(_, area)| polygons_overlap(polygon, area, tolerance))
        .map(|(i, _)| i)
        .collect()
}

/// Derived validity flags of a working polygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    pub has_overlap: bool,
    pub is_self_intersecting: bool,
}

impl Validity {
    /// Compute both flags. Polygons below the vertex minimum report neither.
    pub fn evaluate(polygon: &Polygon, existing: &ExistingAreas, tolerance: Tolerance) -> Self {
        if polygon.len() < MIN_POLYGON_VERTICES {
            return Self::default();
        }
        Self {
            has_overlap: overlaps_any(polygon, existing, tolerance),
            is_self_intersecting: has_self_intersection(polygon, tolerance),
        }
    }

    /// Neither flag is set.
    pub fn is_clear(&self) -> bool {
        !self.has_overlap && !self.is_self_intersecting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    fn c(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude)
    }

    fn square(lat: f64, lng: f64, size: f64) -> Polygon {
        Polygon::from_vertices(vec![
            c(lat, lng),
            c(lat, lng + size),
            c(lat + size, lng + size),
            c(lat + size, lng),
        ])
    }

    fn bowtie() -> Polygon {
        Polygon::from_vertices(vec![c(0.0, 0.0), c(1.0, 1.0), c(0.0, 1.0), c(1.0, 0.0)])
    }

    #[test]
    fn test_triangle_is_simple() {
        let tol = Tolerance::default();
        let triangle = Polygon::from_vertices(vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 0.5)]);
        assert!(!has_self_intersection(&triangle, tol));

        let validity = Validity::evaluate(&triangle, &ExistingAreas::default(), tol);
        assert!(validity.is_clear());
    }

    #[test]
    fn test_bowtie_is_self_intersecting() {
        assert!(has_self_intersection(&bowtie(), Tolerance::default()));
    }

    #[test]
    fn test_square_is_simple() {
        assert!(!has_self_intersection(&square(0.0, 0.0, 1.0), Tolerance::EXACT));
    }

    #[test]
    fn test_incremental_check_rejects_crossing_append() {
        let tol = Tolerance::default();
        // Appending (1,0) after (0,0),(1,1),(0,1) crosses the first edge.
        assert!(would_create_self_intersection(&bowtie(), tol));

        let ok = square(0.0, 0.0, 1.0);
        assert!(!would_create_self_intersection(&ok, tol));
    }

    #[test]
    fn test_incremental_check_catches_closing_edge() {
        let tol = Tolerance::default();
        // The new edge is fine, but the closing edge back to (0,0) cuts
        // through the edge between the second and third vertex.
        let candidate = Polygon::from_vertices(vec![
            c(0.0, 0.0),
            c(1.0, 2.0),
            c(1.0, -2.0),
            c(3.0, -2.0),
            c(3.0, 1.0),
        ]);
        assert!(would_create_self_intersection(&candidate, tol));
        assert!(has_self_intersection(&candidate, tol));
    }

    #[test]
    fn test_incremental_check_agrees_on_small_inputs() {
        let tol = Tolerance::default();
        let triangle = Polygon::from_vertices(vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 0.0)]);
        assert!(!would_create_self_intersection(&triangle, tol));
    }

    #[test]
    fn test_disjoint_squares_do_not_overlap() {
        let tol = Tolerance::default();
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 5.0, 1.0);
        assert!(!polygons_overlap(&a, &b, tol));
    }

    #[test]
    fn test_partial_overlap() {
        let tol = Tolerance::default();
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        assert!(polygons_overlap(&a, &b, tol));
    }

    #[test]
    fn test_containment_overlaps() {
        let tol = Tolerance::default();
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(2.0, 2.0, 1.0);
        assert!(polygons_overlap(&outer, &inner, tol));
        assert!(polygons_overlap(&inner, &outer, tol));
    }

    #[test]
    fn test_cross_shaped_overlap_without_contained_vertices() {
        let tol = Tolerance::default();
        let wide = Polygon::from_vertices(vec![c(1.0, 0.0), c(1.0, 3.0), c(2.0, 3.0), c(2.0, 0.0)]);
        let tall = Polygon::from_vertices(vec![c(0.0, 1.0), c(0.0, 2.0), c(3.0, 2.0), c(3.0, 1.0)]);
        assert!(polygons_overlap(&wide, &tall, tol));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let tol = Tolerance::default();
        let shapes = [
            square(0.0, 0.0, 1.0),
            square(0.5, 0.5, 1.0),
            square(3.0, 3.0, 1.0),
            square(-1.0, -1.0, 5.0),
            bowtie(),
            Polygon::from_vertices(vec![c(1.0, 0.0), c(1.0, 3.0), c(2.0, 1.5)]),
        ];
        for a in &shapes {
            for b in &shapes {
                assert_eq!(polygons_overlap(a, b, tol), polygons_overlap(b, a, tol));
            }
        }
    }

    #[test]
    fn test_shared_edge_counts_as_overlap() {
        // Collinear shared edges register through the collinear branch.
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.0, 1.0, 1.0);
        assert!(polygons_overlap(&a, &b, Tolerance::EXACT));
    }

    #[test]
    fn test_overlapping_area_indices() {
        let tol = Tolerance::default();
        let existing = ExistingAreas::new(vec![
            square(0.0, 0.0, 1.0),
            square(10.0, 10.0, 1.0),
            square(0.5, 0.5, 1.0),
        ]);
        let candidate = square(0.25, 0.25, 0.5);
        assert_eq!(overlapping_areas(&candidate, &existing, tol), vec![0, 2]);
        assert!(overlaps_any(&candidate, &existing, tol));
    }

    #[test]
    fn test_validity_below_minimum_is_clear() {
        let existing = ExistingAreas::new(vec![square(0.0, 0.0, 1.0)]);
        let two = Polygon::from_vertices(vec![c(0.5, 0.5), c(0.6, 0.6)]);
        assert_eq!(
            Validity::evaluate(&two, &existing, Tolerance::default()),
            Validity::default()
        );
    }
}
