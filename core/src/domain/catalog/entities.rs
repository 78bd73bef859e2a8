use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A physical site. The geofence columns are optional as a pair: enforcement
/// only considers the geofence configured when latitude, longitude and a
/// positive radius are all present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_m: Option<i32>,
}

/// A named subdivision of a [`Location`]. Names are unique within a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Area {
    pub id: i32,
    pub location_id: i32,
    pub name: String,
}

/// An inspectable object within an [`Area`]. Names are unique within an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: i32,
    pub area_id: i32,
    pub name: String,
}
