//! Predicted landing point and containment ellipse for a planned shot.

use crate::geodesy;
use crate::models::club::ClubProfile;
use crate::models::geo::GeoPoint;
use crate::models::round::{DispersionParams, PlannedShot};

/// Standard deviations per half-axis of the containment band.
///
/// 1.64 sigma covers ~90% of a normal distribution per axis; the full axis
/// is twice that. Chosen and fixed here so the displayed ellipse means the
/// same thing for every club.
pub const ELLIPSE_SIGMA_MULTIPLIER: f64 = 1.64;

/// Where a full swing with `club` from `ball_position` lands, absent wind.
pub fn predicted_landing(
    ball_position: GeoPoint,
    club: &ClubProfile,
    target_bearing: f64,
) -> GeoPoint {
    geodesy::destination(ball_position, club.carry_distance, target_bearing)
}

/// The ~90% dispersion ellipse around a predicted landing, rotated onto the
/// shot bearing. `landing` becomes the planned target kept in the ledger.
pub fn dispersion_ellipse_for(
    club: &ClubProfile,
    landing: GeoPoint,
    target_bearing: f64,
) -> PlannedShot {
    PlannedShot {
        target: landing,
        dispersion: DispersionParams {
            lateral: 2.0 * ELLIPSE_SIGMA_MULTIPLIER * club.lateral_error_std_dev,
            depth: 2.0 * ELLIPSE_SIGMA_MULTIPLIER * club.depth_error_std_dev,
            rotation: target_bearing,
        },
    }
}
