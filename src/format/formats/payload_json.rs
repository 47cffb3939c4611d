//! Area payload JSON format.
//!
//! The shape handed to `on_area_complete` / `on_change`:
//! `{"coordinates": [{"latitude": .., "longitude": ..}, ...]}`.

use crate::format::error::FormatError;
use crate::format::traits::{AreaFormat, validate_coordinates};
use crate::model::{AreaPayload, Polygon};

/// The committed-area payload as JSON.
pub struct PayloadJsonFormat;

impl AreaFormat for PayloadJsonFormat {
    fn id(&self) -> &'static str {
        "payload"
    }

    fn display_name(&self) -> &'static str {
        "Area Payload (JSON)"
    }

    fn extensions(&self) -> &[&'static str] {
        &["area.json", "json"]
    }

    fn encode(&self, area: &Polygon) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&AreaPayload::from(area))?)
    }

    fn decode(&self, text: &str) -> Result<Polygon, FormatError> {
        let payload: AreaPayload = serde_json::from_str(text)?;
        validate_coordinates(&payload.coordinates)?;
        Ok(payload.into())
    }
}
