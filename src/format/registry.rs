//! Format registry for discovering and accessing area formats.

use crate::format::error::FormatError;
use crate::format::formats::{CoordinateJsonFormat, GeoJsonFormat, PayloadJsonFormat};
use crate::format::traits::AreaFormat;
use crate::model::Polygon;

/// Registry of available area formats.
///
/// All built-in formats are registered on creation. Registration order is
/// kept, and [`decode_any`](Self::decode_any) tries formats in that order.
pub struct FormatRegistry {
    formats: Vec<Box<dyn AreaFormat>>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats registered.
    pub fn new() -> Self {
        let mut registry = Self {
            formats: Vec::new(),
        };

        registry.register(Box::new(PayloadJsonFormat));
        registry.register(Box::new(GeoJsonFormat));
        registry.register(Box::new(CoordinateJsonFormat));

        registry
    }

    /// Register a format implementation, replacing any with the same ID.
    pub fn register(&mut self, format: Box<dyn AreaFormat>) {
        self.formats.retain(|f| f.id() != format.id());
        self.formats.push(format);
    }

    /// Get a format by its ID.
    pub fn get(&self, id: &str) -> Option<&dyn AreaFormat> {
        self.formats
            .iter()
            .find(|f| f.id() == id)
            .map(|f| f.as_ref())
    }

    /// Find formats by file extension.
    ///
    /// Matches whole extensions only, so `json` finds `area.json` but not
    /// `geojson`.
    pub fn by_extension(&self, ext: &str) -> Vec<&dyn AreaFormat> {
        let ext = ext.trim_start_matches('.');
        self.formats
            .iter()
            .filter(|f| {
                f.extensions()
                    .iter()
                    .any(|e| *e == ext || e.ends_with(&format!(".{}", ext)))
            })
            .map(|f| f.as_ref())
            .collect()
    }

    /// Get all format IDs in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.id()).collect()
    }

    /// Decode with the first format that accepts the input.
    ///
    /// Returns the ID of the format that matched alongside the area.
    /// Coordinate range errors are returned as-is rather than falling
    /// through to the next format.
    pub fn decode_any(&self, text: &str) -> Result<(&'static str, Polygon), FormatError> {
        for format in &self.formats {
            match format.decode(text) {
                Ok(area) => return Ok((format.id(), area)),
                Err(e @ FormatError::InvalidCoordinates { .. }) => return Err(e),
                Err(e) => log::trace!("Format '{}' rejected input: {}", format.id(), e),
            }
        }
        Err(FormatError::Unrecognized { path: None })
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
