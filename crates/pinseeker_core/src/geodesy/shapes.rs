//! Generated display geometry: dispersion ellipses, flight arcs, and
//! smoothed green outlines.
//!
//! Everything here samples a curve in a local planar (meter) frame and
//! projects back to lat/lng with a local equirectangular approximation
//! (longitude scaled by `cos(latitude)`). Good to well under a meter at
//! green-to-fairway scales; none of it feeds back into the shot ledger.

use std::f64::consts::TAU;

use crate::geodesy::constants::{earth, sampling};
use crate::geodesy::sphere::{bearing, destination, distance, midpoint};
use crate::models::geo::GeoPoint;

/// Offsets `center` by planar `(east_m, north_m)` meters.
#[inline]
fn offset(center: GeoPoint, east_m: f64, north_m: f64) -> GeoPoint {
    let d_lat = north_m / earth::RADIUS_M;
    let d_lon = east_m / (earth::RADIUS_M * center.lat.to_radians().cos());
    GeoPoint::new(center.lat + d_lat.to_degrees(), center.lng + d_lon.to_degrees())
}

/// Samples a rotated ellipse around `center`.
///
/// `width_meters`/`height_meters` are the full axes; `rotation_degrees` turns
/// the ellipse clockwise from north, matching shot bearings. Returns
/// `segments + 1` points with the first repeated last (closed loop).
pub fn ellipse_points(
    center: GeoPoint,
    width_meters: f64,
    height_meters: f64,
    rotation_degrees: f64,
    segments: usize,
) -> Vec<GeoPoint> {
    let segments = segments.max(1);
    let rotation = rotation_degrees.to_radians();
    let mut points = Vec::with_capacity(segments + 1);

    for i in 0..=segments {
        let theta = (i as f64 / segments as f64) * TAU;
        let dx = (width_meters / 2.0) * theta.cos();
        let dy = (height_meters / 2.0) * theta.sin();

        // Clockwise-from-north rotation: bearing 0 keeps the height axis on
        // the line of play pointing north, bearing 90 swings it east.
        let rx = dx * rotation.cos() + dy * rotation.sin();
        let ry = -dx * rotation.sin() + dy * rotation.cos();

        points.push(offset(center, rx, ry));
    }
    points
}

/// Ellipse with the default sampling resolution.
pub fn ellipse_points_default(
    center: GeoPoint,
    width_meters: f64,
    height_meters: f64,
    rotation_degrees: f64,
) -> Vec<GeoPoint> {
    ellipse_points(center, width_meters, height_meters, rotation_degrees, sampling::ELLIPSE_SEGMENTS)
}

/// Quadratic Bézier between `start` and `end`, bowed perpendicular to the
/// line by a tenth of its length.
///
/// A visually arced flight path for display, not a trajectory. Returns
/// `segments + 1` points from `start` to `end` inclusive.
pub fn arc_points(start: GeoPoint, end: GeoPoint, segments: usize) -> Vec<GeoPoint> {
    let segments = segments.max(1);
    let mid = midpoint(start, end);
    let brg = bearing(start, end);
    let bow = distance(start, end) * sampling::ARC_BOW_RATIO;
    let control = destination(mid, bow, brg - 90.0);

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let a = (1.0 - t) * (1.0 - t);
        let b = 2.0 * (1.0 - t) * t;
        let c = t * t;
        points.push(GeoPoint::new(
            a * start.lat + b * control.lat + c * end.lat,
            a * start.lng + b * control.lng + c * end.lng,
        ));
    }
    points
}

/// Flight arc with the default sampling resolution.
pub fn arc_points_default(start: GeoPoint, end: GeoPoint) -> Vec<GeoPoint> {
    arc_points(start, end, sampling::ARC_SEGMENTS)
}

/// Catmull-Rom interpolation of one coordinate across a span.
#[inline]
fn catmull_rom(v0: f64, v1: f64, v2: f64, v3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * v1)
        + (-v0 + v2) * t
        + (2.0 * v0 - 5.0 * v1 + 4.0 * v2 - v3) * t2
        + (-v0 + 3.0 * v1 - 3.0 * v2 + v3) * t3)
}

/// Smooth closed polygon through a circular sequence of control points.
///
/// Runs a Catmull-Rom spline over the wrap-around neighborhood of every
/// control point, then repeats the first output point to close the loop
/// exactly. Fewer than 3 control points cannot be smoothed; the input is
/// returned unchanged.
///
/// `_tension` is accepted for parity with the authoring tool's signature;
/// the uniform 0.5 spline is baked into [`catmull_rom`].
pub fn smooth_closed_path(
    control_points: &[GeoPoint],
    _tension: f64,
    segments_per_span: usize,
) -> Vec<GeoPoint> {
    if control_points.len() < 3 {
        return control_points.to_vec();
    }
    let segments_per_span = segments_per_span.max(1);

    let n = control_points.len();
    let mut result = Vec::with_capacity(n * segments_per_span + 1);

    for i in 0..n {
        let p0 = control_points[(i + n - 1) % n];
        let p1 = control_points[i];
        let p2 = control_points[(i + 1) % n];
        let p3 = control_points[(i + 2) % n];

        for step in 0..segments_per_span {
            let t = step as f64 / segments_per_span as f64;
            result.push(GeoPoint::new(
                catmull_rom(p0.lat, p1.lat, p2.lat, p3.lat, t),
                catmull_rom(p0.lng, p1.lng, p2.lng, p3.lng, t),
            ));
        }
    }

    // Close the loop exactly for renderers that do not auto-close.
    result.push(result[0]);
    result
}

/// Smoothing with the default tension and resolution.
pub fn smooth_closed_path_default(control_points: &[GeoPoint]) -> Vec<GeoPoint> {
    smooth_closed_path(control_points, sampling::SPLINE_TENSION, sampling::SPLINE_SEGMENTS_PER_SPAN)
}
