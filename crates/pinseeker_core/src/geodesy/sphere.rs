//! Point-to-point math on a spherical Earth.
//!
//! Pure, stateless, and infallible: degenerate inputs (identical points,
//! zero distances) produce defined outputs rather than NaN. Accuracy is
//! bounded by the spherical model, which is fine at on-course ranges.

use crate::geodesy::constants::{earth, wind};
use crate::models::geo::GeoPoint;

#[inline]
fn to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

#[inline]
fn to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Haversine great-circle distance in meters.
///
/// Symmetric, and zero (within floating tolerance) iff the points coincide.
pub fn distance(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let d_lat = to_rad(p2.lat - p1.lat);
    let d_lon = to_rad(p2.lng - p1.lng);
    let lat1 = to_rad(p1.lat);
    let lat2 = to_rad(p2.lat);

    let a = ((d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + (d_lon / 2.0).sin() * (d_lon / 2.0).sin() * lat1.cos() * lat2.cos())
    .clamp(0.0, 1.0); // rounding near antipodes must not push a past 1
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    earth::RADIUS_M * c
}

/// Initial bearing from `from` to `to`, degrees in `[0, 360)`.
///
/// Undefined for coincident points; returns 0 there.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    if from == to {
        return 0.0;
    }
    let lat1 = to_rad(from.lat);
    let lat2 = to_rad(to.lat);
    let d_lon = to_rad(to.lng - from.lng);

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    to_deg(y.atan2(x)).rem_euclid(360.0)
}

/// Direct geodetic problem: the point `distance_meters` away from `start`
/// along `bearing_degrees`.
///
/// Inverse of `distance` + `bearing` up to numerical tolerance.
pub fn destination(start: GeoPoint, distance_meters: f64, bearing_degrees: f64) -> GeoPoint {
    let lat = to_rad(start.lat);
    let lon = to_rad(start.lng);
    let brg = to_rad(bearing_degrees);
    let angular = distance_meters / earth::RADIUS_M;

    let end_lat = (lat.sin() * angular.cos() + lat.cos() * angular.sin() * brg.cos()).asin();
    let end_lon = lon
        + (brg.sin() * angular.sin() * lat.cos())
            .atan2(angular.cos() - lat.sin() * end_lat.sin());

    GeoPoint::new(to_deg(end_lat), to_deg(end_lon))
}

/// Arithmetic midpoint, used as a label/arc anchor at on-course ranges.
#[inline]
pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    GeoPoint::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0)
}

/// Result of a first-order wind adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindAdjustedShot {
    pub destination: GeoPoint,
    /// The "plays like" carry after the head/tail component.
    pub effective_distance: f64,
}

/// Adjusts a shot for wind by decomposing it into head/cross components
/// relative to the shot bearing.
///
/// `wind_direction` is the compass direction the wind blows toward; a wind
/// blowing against the shot reduces carry, a following wind increases it.
/// The cross component deflects the bearing proportionally to the remaining
/// distance. Coefficients live in [`wind`] and are empirical tunables.
pub fn wind_adjusted_shot(
    start: GeoPoint,
    base_distance: f64,
    bearing_degrees: f64,
    wind_speed: f64,
    wind_direction: f64,
) -> WindAdjustedShot {
    let relative_angle = to_rad((wind_direction - bearing_degrees + 180.0).rem_euclid(360.0));

    let head_component = wind_speed * relative_angle.cos();
    let cross_component = wind_speed * relative_angle.sin();

    let distance_effect = head_component * wind::HEADWIND_DISTANCE_COEFF * base_distance;
    // Negated so a wind toward the right of the shot drifts the ball right,
    // matching the blowing-toward convention of the head component.
    let side_effect = -cross_component * wind::CROSSWIND_DRIFT_COEFF * base_distance;

    let effective_distance = base_distance - distance_effect;
    let bearing_shift = to_deg(side_effect.atan2(effective_distance));

    WindAdjustedShot {
        destination: destination(start, effective_distance, bearing_degrees + bearing_shift),
        effective_distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: GeoPoint = GeoPoint { lat: 51.253031, lng: 6.610690 };

    #[test]
    fn test_distance_is_symmetric() {
        let a = ORIGIN;
        let b = GeoPoint::new(51.256435, 6.610896);
        let ab = distance(a, b);
        let ba = distance(b, a);
        assert!((ab - ba).abs() / ab < 1e-6, "distance must be symmetric");
    }

    #[test]
    fn test_distance_zero_for_identical_points() {
        assert!(distance(ORIGIN, ORIGIN) < 1e-9);
    }

    #[test]
    fn test_destination_inverts_distance_and_bearing() {
        for &(d, b) in &[(50.0, 0.0), (150.0, 45.0), (230.0, 200.0), (320.0, 359.0)] {
            let end = destination(ORIGIN, d, b);
            let measured = distance(ORIGIN, end);
            assert!(
                (measured - d).abs() / d < 0.001,
                "round-trip distance {} should be within 0.1% of {}",
                measured,
                d
            );
            let measured_bearing = bearing(ORIGIN, end);
            assert!(
                (measured_bearing - b).abs() < 0.5,
                "round-trip bearing {} should be near {}",
                measured_bearing,
                b
            );
        }
    }

    #[test]
    fn test_bearing_due_north_and_range() {
        let north = bearing(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!(north.abs() < 1e-9, "due north should be 0, got {}", north);

        let west = bearing(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, -1.0));
        assert!((west - 270.0).abs() < 1e-6, "due west should be 270, got {}", west);
    }

    #[test]
    fn test_bearing_of_coincident_points_is_zero() {
        assert_eq!(bearing(ORIGIN, ORIGIN), 0.0);
    }

    #[test]
    fn test_headwind_reduces_and_tailwind_increases_carry() {
        // Shot due north; wind blowing toward due south is against the shot.
        let against = wind_adjusted_shot(ORIGIN, 200.0, 0.0, 10.0, 180.0);
        assert!(
            against.effective_distance < 200.0,
            "wind against the shot should shorten it, got {}",
            against.effective_distance
        );

        // Wind blowing toward due north follows the shot.
        let following = wind_adjusted_shot(ORIGIN, 200.0, 0.0, 10.0, 0.0);
        assert!(
            following.effective_distance > 200.0,
            "following wind should lengthen it, got {}",
            following.effective_distance
        );
        assert!((against.effective_distance - 180.0).abs() < 1e-9);
        assert!((following.effective_distance - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_crosswind_deflects_bearing() {
        // Shot due north, pure crosswind blowing toward the east.
        let adjusted = wind_adjusted_shot(ORIGIN, 200.0, 0.0, 10.0, 90.0);
        let drifted_bearing = bearing(ORIGIN, adjusted.destination);
        assert!(
            drifted_bearing > 0.5 && drifted_bearing < 90.0,
            "crosswind should push the shot east of north, got {}",
            drifted_bearing
        );
        // Pure crosswind leaves the carry nearly unchanged.
        assert!((adjusted.effective_distance - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(GeoPoint::new(0.0, 0.0), GeoPoint::new(2.0, 4.0));
        assert_eq!(m, GeoPoint::new(1.0, 2.0));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: distance is symmetric for any pair of points.
            #[test]
            fn prop_distance_symmetric(
                lat1 in -80.0f64..80.0, lng1 in -179.0f64..179.0,
                lat2 in -80.0f64..80.0, lng2 in -179.0f64..179.0
            ) {
                let a = GeoPoint::new(lat1, lng1);
                let b = GeoPoint::new(lat2, lng2);
                let ab = distance(a, b);
                let ba = distance(b, a);
                prop_assert!((ab - ba).abs() <= 1e-6 * ab.max(1.0));
            }

            /// Property: destination inverts distance to within 0.1%.
            #[test]
            fn prop_destination_roundtrip(
                lat in -60.0f64..60.0, lng in -179.0f64..179.0,
                d in 1.0f64..5000.0, b in 0.0f64..360.0
            ) {
                let start = GeoPoint::new(lat, lng);
                let end = destination(start, d, b);
                let measured = distance(start, end);
                prop_assert!((measured - d).abs() / d < 0.001);
            }

            /// Property: bearing is always in [0, 360).
            #[test]
            fn prop_bearing_range(
                lat1 in -80.0f64..80.0, lng1 in -179.0f64..179.0,
                lat2 in -80.0f64..80.0, lng2 in -179.0f64..179.0
            ) {
                let b = bearing(GeoPoint::new(lat1, lng1), GeoPoint::new(lat2, lng2));
                prop_assert!((0.0..360.0).contains(&b));
            }
        }
    }
}
