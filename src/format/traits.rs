//! Trait definitions for area format implementations.

use std::path::Path;

use crate::format::error::FormatError;
use crate::model::{Coordinate, Polygon};

/// Trait for service-area import/export implementations.
///
/// Each format converts between a committed [`Polygon`] and its textual
/// representation. File helpers are provided on top of `encode`/`decode`.
pub trait AreaFormat: Send + Sync {
    /// Unique identifier for this format (e.g., "payload", "geojson").
    fn id(&self) -> &'static str;

    /// Human-readable name for display.
    fn display_name(&self) -> &'static str;

    /// File extensions this format uses.
    fn extensions(&self) -> &[&'static str];

    /// Serialize an area.
    fn encode(&self, area: &Polygon) -> Result<String, FormatError>;

    /// Parse an area. Coordinates are checked with [`validate_coordinates`].
    fn decode(&self, text: &str) -> Result<Polygon, FormatError>;

    /// Write an area to `path`.
    fn export(&self, area: &Polygon, path: &Path) -> Result<(), FormatError> {
        let text = self.encode(area)?;
        std::fs::write(path, text)?;
        log::info!(
            "Exported area with {} points as {} to {:?}",
            area.len(),
            self.display_name(),
            path
        );
        Ok(())
    }

    /// Read an area from `path`.
    fn import(&self, path: &Path) -> Result<Polygon, FormatError> {
        let text = std::fs::read_to_string(path)?;
        let area = self.decode(&text)?;
        log::debug!(
            "Imported area with {} points as {} from {:?}",
            area.len(),
            self.display_name(),
            path
        );
        Ok(area)
    }
}

/// Reject coordinates that are not finite or lie outside WGS84 ranges.
pub fn validate_coordinates(coordinates: &[Coordinate]) -> Result<(), FormatError> {
    for (i, c) in coordinates.iter().enumerate() {
        if !c.is_finite() {
            return Err(FormatError::invalid_coordinates(format!(
                "point {} is not a finite number",
                i
            )));
        }
        if !(-90.0..=90.0).contains(&c.latitude) {
            return Err(FormatError::invalid_coordinates(format!(
                "point {} has latitude {} outside [-90, 90]",
                i, c.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&c.longitude) {
            return Err(FormatError::invalid_coordinates(format!(
                "point {} has longitude {} outside [-180, 180]",
                i, c.longitude
            )));
        }
    }
    Ok(())
}
