//! Coordinates and service-area polygons.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_POLYGON_VERTICES;

/// A geographic position as supplied by the map control.
///
/// Geometry treats `longitude` as x and `latitude` as y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar x component (longitude).
    #[inline]
    pub fn x(&self) -> f64 {
        self.longitude
    }

    /// Planar y component (latitude).
    #[inline]
    pub fn y(&self) -> f64 {
        self.latitude
    }

    /// Check that both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Axis-aligned bounds of a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    /// Center of the bounds.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min.latitude + self.max.latitude) / 2.0,
            (self.min.longitude + self.max.longitude) / 2.0,
        )
    }

    pub fn latitude_span(&self) -> f64 {
        self.max.latitude - self.min.latitude
    }

    pub fn longitude_span(&self) -> f64 {
        self.max.longitude - self.min.longitude
    }
}

/// An ordered ring of coordinates.
///
/// The edge from the last vertex back to the first is implicit and always
/// part of the polygon, so vertices are never repeated to close the ring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    /// The vertices in ring order.
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the ring has enough vertices to enclose an area.
    pub fn is_closed_ring(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.vertices.get(index).copied()
    }

    pub fn push(&mut self, coordinate: Coordinate) {
        self.vertices.push(coordinate);
    }

    pub fn pop(&mut self) -> Option<Coordinate> {
        self.vertices.pop()
    }

    /// Replace the vertex at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, coordinate: Coordinate) -> Option<Coordinate> {
        let slot = self.vertices.get_mut(index)?;
        Some(std::mem::replace(slot, coordinate))
    }

    /// Remove the vertex at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Coordinate> {
        if index < self.vertices.len() {
            Some(self.vertices.remove(index))
        } else {
            None
        }
    }

    /// Edge `index` of the ring: from vertex `index` to the next one,
    /// wrapping around at the end.
    pub fn edge(&self, index: usize) -> Option<(Coordinate, Coordinate)> {
        let n = self.vertices.len();
        if index >= n || n < 2 {
            return None;
        }
        Some((self.vertices[index], self.vertices[(index + 1) % n]))
    }

    /// Number of edges in the closed ring.
    pub fn edge_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            n => n,
        }
    }

    /// Iterate all edges of the closed ring, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        (0..self.edge_count()).filter_map(move |i| self.edge(i))
    }

    /// Get the bounds of the polygon.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;

        for p in &self.vertices[1..] {
            min.latitude = min.latitude.min(p.latitude);
            min.longitude = min.longitude.min(p.longitude);
            max.latitude = max.latitude.max(p.latitude);
            max.longitude = max.longitude.max(p.longitude);
        }

        Some(Bounds { min, max })
    }
}

impl From<Vec<Coordinate>> for Polygon {
    fn from(vertices: Vec<Coordinate>) -> Self {
        Self::from_vertices(vertices)
    }
}

impl FromIterator<Coordinate> for Polygon {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}

/// Service areas already committed elsewhere.
///
/// This is a read-only snapshot: the editor checks against it but never
/// changes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExistingAreas {
    areas: Vec<Polygon>,
}

impl ExistingAreas {
    pub fn new(areas: Vec<Polygon>) -> Self {
        Self { areas }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Polygon> {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn as_slice(&self) -> &[Polygon] {
        &self.areas
    }
}

impl From<Vec<Polygon>> for ExistingAreas {
    fn from(areas: Vec<Polygon>) -> Self {
        Self::new(areas)
    }
}

impl FromIterator<Polygon> for ExistingAreas {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
