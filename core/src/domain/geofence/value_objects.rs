use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of a geofence check. The distance is always populated so callers
/// can show how far off an out-of-range submission was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeofenceCheck {
    pub valid: bool,
    pub distance_m: f64,
    pub radius_m: i32,
}
