//! Loading existing service areas.
//!
//! Backends return the other franchises' areas either as bare coordinate
//! arrays or wrapped in area payloads; both shapes are accepted, and may be
//! mixed within one file.

use std::path::Path;

use serde::Deserialize;

use crate::format::error::FormatError;
use crate::format::traits::validate_coordinates;
use crate::model::{AreaPayload, ExistingAreas, Polygon};

#[derive(Deserialize)]
#[serde(untagged)]
enum AreaEntry {
    Coordinates(Polygon),
    Payload(AreaPayload),
}

impl From<AreaEntry> for Polygon {
    fn from(entry: AreaEntry) -> Self {
        match entry {
            AreaEntry::Coordinates(polygon) => polygon,
            AreaEntry::Payload(payload) => payload.into(),
        }
    }
}

/// Parse a JSON array of existing areas.
pub fn decode_existing_areas(text: &str) -> Result<ExistingAreas, FormatError> {
    let entries: Vec<AreaEntry> = serde_json::from_str(text)?;
    let areas: Vec<Polygon> = entries.into_iter().map(Polygon::from).collect();

    for (i, area) in areas.iter().enumerate() {
        validate_coordinates(area.vertices()).map_err(|e| match e {
            FormatError::InvalidCoordinates { message } => {
                FormatError::invalid_coordinates(format!("area {}: {}", i, message))
            }
            other => other,
        })?;
        if !area.is_closed_ring() {
            log::warn!(
                "Existing area {} has only {} points and cannot overlap anything",
                i,
                area.len()
            );
        }
    }

    Ok(ExistingAreas::new(areas))
}

/// Read existing areas from a JSON file.
pub fn load_existing_areas(path: &Path) -> Result<ExistingAreas, FormatError> {
    let text = std::fs::read_to_string(path)?;
    let areas = decode_existing_areas(&text)?;
    log::info!("Loaded {} existing areas from {:?}", areas.len(), path);
    Ok(areas)
}

/// Serialize existing areas as an array of coordinate arrays.
pub fn encode_existing_areas(areas: &ExistingAreas) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(areas)?)
}
