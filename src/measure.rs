//! Geodesic measurements of service areas.

use geo::algorithm::geodesic_area::GeodesicArea;
use geo::{Centroid, Coord, LineString};
use serde::Serialize;

use crate::model::{Coordinate, Polygon};

/// Convert a service area into a `geo` polygon (x = longitude, y = latitude).
///
/// Returns None below three vertices. The ring is closed by `geo`.
pub fn to_geo_polygon(polygon: &Polygon) -> Option<geo::Polygon<f64>> {
    if !polygon.is_closed_ring() {
        return None;
    }
    let coords: Vec<Coord<f64>> = polygon
        .vertices()
        .iter()
        .map(|p| Coord {
            x: p.longitude,
            y: p.latitude,
        })
        .collect();
    Some(geo::Polygon::new(LineString::from(coords), vec![]))
}

/// Area on the WGS84 ellipsoid in square meters. Zero below three vertices.
pub fn geodesic_area(polygon: &Polygon) -> f64 {
    to_geo_polygon(polygon)
        .map(|p| p.geodesic_area_unsigned())
        .unwrap_or(0.0)
}

/// Perimeter on the WGS84 ellipsoid in meters, including the closing edge.
pub fn geodesic_perimeter(polygon: &Polygon) -> f64 {
    to_geo_polygon(polygon)
        .map(|p| p.geodesic_perimeter())
        .unwrap_or(0.0)
}

/// Planar centroid of the enclosed area.
pub fn centroid(polygon: &Polygon) -> Option<Coordinate> {
    let point = to_geo_polygon(polygon)?.centroid()?;
    Some(Coordinate::new(point.y(), point.x()))
}

/// Summary of a service area's size and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSummary {
    pub vertex_count: usize,
    pub area_m2: f64,
    pub perimeter_m: f64,
    pub centroid: Option<Coordinate>,
}

impl AreaSummary {
    pub fn of(polygon: &Polygon) -> Self {
        Self {
            vertex_count: polygon.len(),
            area_m2: geodesic_area(polygon),
            perimeter_m: geodesic_perimeter(polygon),
            centroid: centroid(polygon),
        }
    }

    /// Area in square kilometers.
    pub fn area_km2(&self) -> f64 {
        self.area_m2 / 1_000_000.0
    }
}
