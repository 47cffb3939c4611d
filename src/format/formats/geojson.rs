//! GeoJSON `Polygon` geometry format.
//!
//! Positions are `[longitude, latitude]` and the exterior ring is explicitly
//! closed by repeating the first position. A third altitude value is accepted
//! on input and dropped. Interior rings are not supported.

use serde::{Deserialize, Serialize};

use crate::format::error::FormatError;
use crate::format::traits::{AreaFormat, validate_coordinates};
use crate::model::{Coordinate, Polygon};

/// GeoJSON polygon geometry.
pub struct GeoJsonFormat;

#[derive(Debug, Serialize, Deserialize)]
struct GeoJsonPolygon {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<Vec<Vec<f64>>>,
}

impl AreaFormat for GeoJsonFormat {
    fn id(&self) -> &'static str {
        "geojson"
    }

    fn display_name(&self) -> &'static str {
        "GeoJSON Polygon"
    }

    fn extensions(&self) -> &[&'static str] {
        &["geojson"]
    }

    fn encode(&self, area: &Polygon) -> Result<String, FormatError> {
        let mut ring: Vec<Vec<f64>> = area
            .vertices()
            .iter()
            .map(|c| vec![c.longitude, c.latitude])
            .collect();
        if let Some(first) = ring.first().cloned() {
            ring.push(first);
        }

        let geometry = GeoJsonPolygon {
            kind: "Polygon".to_string(),
            coordinates: vec![ring],
        };
        Ok(serde_json::to_string(&geometry)?)
    }

    fn decode(&self, text: &str) -> Result<Polygon, FormatError> {
        let geometry: GeoJsonPolygon = serde_json::from_str(text)?;
        if geometry.kind != "Polygon" {
            return Err(FormatError::invalid_format(format!(
                "expected GeoJSON type 'Polygon', found '{}'",
                geometry.kind
            )));
        }
        if geometry.coordinates.len() > 1 {
            log::warn!(
                "Ignoring {} interior ring(s) in GeoJSON polygon",
                geometry.coordinates.len() - 1
            );
        }

        let ring = geometry
            .coordinates
            .into_iter()
            .next()
            .ok_or_else(|| FormatError::invalid_format("GeoJSON polygon has no rings"))?;

        let mut vertices = ring
            .iter()
            .enumerate()
            .map(|(i, position)| match position.as_slice() {
                [lng, lat, ..] => Ok(Coordinate::new(*lat, *lng)),
                _ => Err(FormatError::invalid_format(format!(
                    "position {} has {} values, expected at least 2",
                    i,
                    position.len()
                ))),
            })
            .collect::<Result<Vec<Coordinate>, FormatError>>()?;
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        validate_coordinates(&vertices)?;
        Ok(Polygon::from_vertices(vertices))
    }
}
