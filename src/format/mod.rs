//! Service-area import/export.
//!
//! This module provides a trait-based system for reading and writing
//! service areas. New formats are added by implementing [`AreaFormat`]
//! and registering them with a [`FormatRegistry`].
//!
//! ## Supported Formats
//!
//! - **Area Payload JSON**: `{"coordinates": [...]}`, as reported on commit
//! - **Coordinate Array JSON**: `[{"latitude", "longitude"}, ...]`, as stored
//!   on franchise records
//! - **GeoJSON Polygon**: for GIS tools
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geofence::format::FormatRegistry;
//!
//! let registry = FormatRegistry::new();
//! let (format_id, area) = registry.decode_any(&text)?;
//! let geojson = registry.get("geojson").unwrap().encode(&area)?;
//! ```

mod error;
mod existing;
pub mod formats;
mod registry;
mod traits;

pub use error::FormatError;
pub use existing::{decode_existing_areas, encode_existing_areas, load_existing_areas};
pub use registry::FormatRegistry;
pub use traits::{AreaFormat, validate_coordinates};
