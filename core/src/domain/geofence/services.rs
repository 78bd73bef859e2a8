use crate::domain::{
    catalog::entities::Location,
    common::entities::app_errors::CoreError,
    geofence::value_objects::{GeoPoint, GeofenceCheck},
};

/// Mean earth radius in meters, as used by the haversine formula.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters. Registered radii are
/// tens to hundreds of meters, so a flat-earth approximation is not enough.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Checks a submission point against a location's registered geofence.
///
/// Fails with [`CoreError::GeofenceNotConfigured`] when the location has no
/// center coordinates or a non-positive radius; a missing geofence must reject
/// the submission rather than silently allow it.
pub fn check_within_geofence(location: &Location, point: GeoPoint) -> Result<GeofenceCheck, CoreError> {
    let (center_lat, center_lon, radius_m) = match (location.latitude, location.longitude, location.radius_m) {
        (Some(lat), Some(lon), Some(radius)) if radius > 0 => (lat, lon, radius),
        _ => return Err(CoreError::GeofenceNotConfigured),
    };

    let distance_m = haversine_distance_m(
        GeoPoint {
            latitude: center_lat,
            longitude: center_lon,
        },
        point,
    );

    Ok(GeofenceCheck {
        valid: distance_m <= radius_m as f64,
        distance_m,
        radius_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(latitude: Option<f64>, longitude: Option<f64>, radius_m: Option<i32>) -> Location {
        Location {
            id: 1,
            name: "Terminal Ferry".to_string(),
            latitude,
            longitude,
            radius_m,
        }
    }

    // Roughly one degree of latitude in meters, for building offsets.
    const METERS_PER_DEG_LAT: f64 = 111_320.0;

    fn point_north_of(lat: f64, lon: f64, meters: f64) -> GeoPoint {
        GeoPoint {
            latitude: lat + meters / METERS_PER_DEG_LAT,
            longitude: lon,
        }
    }

    #[test]
    fn unconfigured_geofence_is_never_valid() {
        let cases = [
            location(None, None, None),
            location(None, None, Some(200)),
            location(Some(1.0), None, Some(200)),
            location(None, Some(104.0), Some(200)),
            location(Some(1.0), Some(104.0), None),
            location(Some(1.0), Some(104.0), Some(0)),
            location(Some(1.0), Some(104.0), Some(-5)),
        ];

        for loc in cases {
            let result = check_within_geofence(
                &loc,
                GeoPoint {
                    latitude: 1.0,
                    longitude: 104.0,
                },
            );
            assert_eq!(result, Err(CoreError::GeofenceNotConfigured), "{loc:?}");
        }
    }

    #[test]
    fn nearby_point_is_within_radius() {
        let loc = location(Some(1.0), Some(104.0), Some(200));
        let check = check_within_geofence(&loc, point_north_of(1.0, 104.0, 50.0)).unwrap();

        assert!(check.valid);
        assert_eq!(check.radius_m, 200);
        assert!((check.distance_m - 50.0).abs() < 2.0, "got {}", check.distance_m);
    }

    #[test]
    fn far_point_is_rejected_with_distance() {
        let loc = location(Some(1.0), Some(104.0), Some(200));
        let check = check_within_geofence(&loc, point_north_of(1.0, 104.0, 5_000.0)).unwrap();

        assert!(!check.valid);
        assert!((check.distance_m - 5_000.0).abs() < 20.0, "got {}", check.distance_m);
    }

    #[test]
    fn distance_grows_monotonically() {
        let loc = location(Some(1.0), Some(104.0), Some(200));
        let mut previous = -1.0;

        for meters in [0.0, 10.0, 100.0, 500.0, 2_000.0, 10_000.0] {
            let check = check_within_geofence(&loc, point_north_of(1.0, 104.0, meters)).unwrap();
            assert!(check.distance_m > previous, "{meters}m");
            previous = check.distance_m;
        }
    }

    #[test]
    fn center_point_has_zero_distance() {
        let loc = location(Some(1.0), Some(104.0), Some(200));
        let check = check_within_geofence(
            &loc,
            GeoPoint {
                latitude: 1.0,
                longitude: 104.0,
            },
        )
        .unwrap();

        assert!(check.valid);
        assert!(check.distance_m.abs() < f64::EPSILON);
    }
}
