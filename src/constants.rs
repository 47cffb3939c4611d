//! Global constants for the geofence editor

/// Minimum number of vertices for a closed service area.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Default tolerance below which an orientation value counts as collinear.
///
/// The orientation value is a cross product of degree offsets, so its unit is
/// squared degrees. 1e-12 deg² is roughly a 10 cm x 10 cm parallelogram at the
/// equator.
pub const DEFAULT_COLLINEAR_EPSILON: f64 = 1e-12;

/// Padding factor applied to an area's bounds when framing it on the map.
pub const DEFAULT_REGION_PADDING: f64 = 1.2;

/// Smallest latitude/longitude span of a derived map region, in degrees.
pub const MIN_REGION_DELTA: f64 = 0.005;
