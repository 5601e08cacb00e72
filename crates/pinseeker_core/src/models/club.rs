use serde::{Deserialize, Serialize};

/// One bag entry: a club and its carry/error profile.
///
/// Carry and error figures are in meters. Invariants: `carry_distance > 0`,
/// errors are non-negative. The error fields are one standard deviation of
/// the lateral (side-to-side) and depth (short/long) landing scatter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClubProfile {
    pub name: String,
    pub carry_distance: f64,
    pub lateral_error_std_dev: f64,
    pub depth_error_std_dev: f64,
}

impl ClubProfile {
    pub fn new(name: &str, carry_distance: f64, lateral: f64, depth: f64) -> Self {
        Self {
            name: name.to_string(),
            carry_distance,
            lateral_error_std_dev: lateral,
            depth_error_std_dev: depth,
        }
    }

    /// Club roles are identified by name; bags are user-editable free text.
    pub fn is_driver(&self) -> bool {
        self.name.to_lowercase().contains("driver")
    }

    pub fn is_putter(&self) -> bool {
        self.name.to_lowercase().contains("putter")
    }
}
