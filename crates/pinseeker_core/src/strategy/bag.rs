//! Bag generation from a single skill scalar.
//!
//! A scratch-golfer baseline table defines each club's nominal carry and its
//! error-per-carry ratios; a handicap scales carries down and scatter up,
//! saturating at 30. The raw handicap may exceed the scaling range (it is
//! still stored by the profile collaborator).

use once_cell::sync::Lazy;

use crate::models::club::ClubProfile;

/// Carry lost per handicap stroke, as a fraction.
const DISTANCE_LOSS_PER_STROKE: f64 = 0.008;

/// Scatter gained per handicap stroke, as a fraction.
const SCATTER_GAIN_PER_STROKE: f64 = 0.08;

/// Handicap strokes beyond which scaling saturates.
const SCALING_SATURATION: f64 = 30.0;

/// Storage clamp for the scaling input.
const HANDICAP_RANGE: (f64, f64) = (0.0, 54.0);

/// `(name, carry_m, lateral_ratio, depth_ratio)` at handicap zero.
static ZERO_HANDICAP_BASELINE: &[(&str, f64, f64, f64)] = &[
    ("Driver", 250.0, 0.06, 0.04),
    ("3 Wood", 230.0, 0.06, 0.04),
    ("3 Hybrid", 210.0, 0.07, 0.05),
    ("4 Iron", 195.0, 0.07, 0.05),
    ("5 Iron", 185.0, 0.08, 0.06),
    ("6 Iron", 175.0, 0.08, 0.06),
    ("7 Iron", 165.0, 0.09, 0.07),
    ("8 Iron", 155.0, 0.09, 0.07),
    ("9 Iron", 145.0, 0.10, 0.08),
    ("PW", 130.0, 0.10, 0.08),
    ("AW", 115.0, 0.11, 0.09),
    ("SW", 100.0, 0.12, 0.10),
    ("LW", 85.0, 0.13, 0.11),
    ("Putter", 30.0, 0.03, 0.03),
];

/// The stock 13-club bag shown before a player enters a handicap.
static DEFAULT_BAG: Lazy<Vec<ClubProfile>> = Lazy::new(|| {
    vec![
        ClubProfile::new("Driver", 230.0, 45.0, 25.0),
        ClubProfile::new("3 Wood", 210.0, 35.0, 20.0),
        ClubProfile::new("3 Hybrid", 190.0, 28.0, 18.0),
        ClubProfile::new("4 Iron", 180.0, 24.0, 16.0),
        ClubProfile::new("5 Iron", 170.0, 22.0, 15.0),
        ClubProfile::new("6 Iron", 160.0, 20.0, 14.0),
        ClubProfile::new("7 Iron", 150.0, 18.0, 12.0),
        ClubProfile::new("8 Iron", 140.0, 15.0, 10.0),
        ClubProfile::new("9 Iron", 130.0, 12.0, 8.0),
        ClubProfile::new("PW", 115.0, 10.0, 7.0),
        ClubProfile::new("SW", 95.0, 8.0, 5.0),
        ClubProfile::new("LW", 80.0, 6.0, 4.0),
        ClubProfile::new("Putter", 30.0, 1.0, 1.0),
    ]
});

pub fn default_bag() -> Vec<ClubProfile> {
    DEFAULT_BAG.clone()
}

/// Derives a full 14-club profile from a handicap.
///
/// Higher handicap means shorter carries and wider dispersion, monotonically,
/// saturating at handicap 30. Carries and errors are rounded to whole meters.
pub fn generate_bag_from_handicap(handicap: f64) -> Vec<ClubProfile> {
    let clamped = handicap.clamp(HANDICAP_RANGE.0, HANDICAP_RANGE.1);
    let effective = clamped.min(SCALING_SATURATION);
    let distance_factor = 1.0 - effective * DISTANCE_LOSS_PER_STROKE;
    let scatter_factor = 1.0 + effective * SCATTER_GAIN_PER_STROKE;

    ZERO_HANDICAP_BASELINE
        .iter()
        .map(|&(name, carry, lateral_ratio, depth_ratio)| {
            let scaled_carry = (carry * distance_factor).round();
            ClubProfile {
                name: name.to_string(),
                carry_distance: scaled_carry,
                lateral_error_std_dev: (scaled_carry * lateral_ratio * scatter_factor).round(),
                depth_error_std_dev: (scaled_carry * depth_ratio * scatter_factor).round(),
            }
        })
        .collect()
}
