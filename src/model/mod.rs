//! Data models for service areas.

mod coordinate;
mod payload;
mod region;

pub use coordinate::{Bounds, Coordinate, ExistingAreas, Polygon};
pub use payload::AreaPayload;
pub use region::MapRegion;
