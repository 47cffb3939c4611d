//! Area format implementations.

mod coordinate_json;
mod geojson;
mod payload_json;

#[cfg(test)]
mod tests;

pub use coordinate_json::CoordinateJsonFormat;
pub use geojson::GeoJsonFormat;
pub use payload_json::PayloadJsonFormat;
