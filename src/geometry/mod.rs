//! Geometry for service-area validation.

mod primitives;
mod validity;

pub use primitives::{Orientation, Tolerance, orientation, point_in_polygon, segments_intersect};
pub use validity::{
    Validity, has_self_intersection, overlapping_areas, overlaps_any, polygons_overlap,
    would_create_self_intersection,
};
