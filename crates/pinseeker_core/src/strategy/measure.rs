//! Two-leg measure readout: ball to a tapped target, target to the green.

use crate::geodesy::{bearing, destination, distance};
use crate::models::geo::GeoPoint;

/// Distances and label anchors for the measure overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureLegs {
    pub to_target: f64,
    pub to_green: f64,
    /// Midpoint of the ball-to-target leg, for its distance label.
    pub target_label: GeoPoint,
    /// Midpoint of the target-to-green leg.
    pub green_label: GeoPoint,
}

/// Measures both legs of a tapped intermediate target.
pub fn measure_legs(ball: GeoPoint, target: GeoPoint, green_center: GeoPoint) -> MeasureLegs {
    let to_target = distance(ball, target);
    let to_green = distance(target, green_center);
    MeasureLegs {
        to_target,
        to_green,
        target_label: destination(ball, to_target / 2.0, bearing(ball, target)),
        green_label: destination(target, to_green / 2.0, bearing(target, green_center)),
    }
}
