//! Bare coordinate array JSON format.
//!
//! This is how franchise records store their service area:
//! `[{"latitude": .., "longitude": ..}, ...]`.

use crate::format::error::FormatError;
use crate::format::traits::{AreaFormat, validate_coordinates};
use crate::model::Polygon;

/// A JSON array of `{latitude, longitude}` objects.
pub struct CoordinateJsonFormat;

impl AreaFormat for CoordinateJsonFormat {
    fn id(&self) -> &'static str {
        "coordinates"
    }

    fn display_name(&self) -> &'static str {
        "Coordinate Array (JSON)"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn encode(&self, area: &Polygon) -> Result<String, FormatError> {
        Ok(serde_json::to_string(area)?)
    }

    fn decode(&self, text: &str) -> Result<Polygon, FormatError> {
        let area: Polygon = serde_json::from_str(text)?;
        validate_coordinates(area.vertices())?;
        Ok(area)
    }
}
