//! Map viewport regions.

use serde::{Deserialize, Serialize};

use super::coordinate::Polygon;
use crate::constants::{DEFAULT_REGION_PADDING, MIN_REGION_DELTA};

/// A map viewport: center plus the visible span in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn new(latitude: f64, longitude: f64, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Frame a polygon with the default padding.
    ///
    /// Returns None for an empty polygon.
    pub fn fit(polygon: &Polygon) -> Option<Self> {
        Self::fit_with_padding(polygon, DEFAULT_REGION_PADDING)
    }

    /// Frame a polygon, scaling its spans by `padding`.
    /// Spans never drop below [`MIN_REGION_DELTA`] so a single point stays viewable.
    pub fn fit_with_padding(polygon: &Polygon, padding: f64) -> Option<Self> {
        let bounds = polygon.bounds()?;
        let center = bounds.center();
        Some(Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta: (bounds.latitude_span() * padding).max(MIN_REGION_DELTA),
            longitude_delta: (bounds.longitude_span() * padding).max(MIN_REGION_DELTA),
        })
    }
}

impl Default for MapRegion {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            latitude_delta: 0.0922,
            longitude_delta: 0.0421,
        }
    }
}
