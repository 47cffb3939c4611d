//! Geofence - service-area polygon editor
//!
//! Headless editor for drawing and editing a service-area polygon on a map,
//! with validation against self-intersection and overlap with existing
//! areas. Hosts feed gestures to [`PolygonEditor::update`] and render from
//! [`PolygonEditor::view`].

pub mod config;
pub mod constants;
pub mod editor;
pub mod format;
pub mod geometry;
pub mod measure;
pub mod model;

pub use config::EditorConfig;
pub use editor::{EditError, EditMode, EditorMessage, EditorProps, PolygonEditor};
pub use geometry::{Tolerance, Validity};
pub use model::{AreaPayload, Coordinate, ExistingAreas, MapRegion, Polygon};
