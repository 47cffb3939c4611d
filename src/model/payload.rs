//! Payload handed to callers when an area is committed.

use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, Polygon};

/// The committed service area, as reported to `on_area_complete` / `on_change`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaPayload {
    pub coordinates: Vec<Coordinate>,
}

impl AreaPayload {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }
}

impl From<&Polygon> for AreaPayload {
    fn from(polygon: &Polygon) -> Self {
        Self::new(polygon.vertices().to_vec())
    }
}

impl From<AreaPayload> for Polygon {
    fn from(payload: AreaPayload) -> Self {
        Polygon::from_vertices(payload.coordinates)
    }
}
