//! Banded strategy headline for the current position.

use serde::{Deserialize, Serialize};

use crate::models::club::ClubProfile;
use crate::units::format_distance;

/// What the caddie line says about the shot at hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyAdvice {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StrategyAdvice {
    fn new(headline: &str, detail: Option<String>) -> Self {
        Self { headline: headline.to_string(), detail }
    }
}

/// Distance bands, evaluated top to bottom; the first match wins.
///
/// Thresholds are fixed by product decision, not derived: inside 5 m is a
/// tap-in, inside 20 m short game, 80-110 m the ideal layup window, past the
/// longest club mid-hole means laying up, and a first shot past 220 m is a
/// driver hole.
pub fn strategy_recommendation(
    distance_to_green: f64,
    bag: &[ClubProfile],
    shot_number: u32,
) -> StrategyAdvice {
    let dist_label = format_distance(distance_to_green, false);

    if distance_to_green < 5.0 {
        return StrategyAdvice::new("Tap-In Range", Some("Excellent Shot!".to_string()));
    }
    if distance_to_green < 20.0 {
        return StrategyAdvice::new("Short Game", Some("Up & down probability high".to_string()));
    }
    if (80.0..=110.0).contains(&distance_to_green) {
        return StrategyAdvice::new(
            "Perfect Layup",
            Some(format!("Leaves full wedge ({})", dist_label)),
        );
    }

    let max_carry = bag.iter().map(|c| c.carry_distance).fold(0.0, f64::max);
    if shot_number > 1 && distance_to_green > max_carry {
        return StrategyAdvice::new("Layup Required", Some("Check recommended combo".to_string()));
    }
    if shot_number == 1 && distance_to_green > 220.0 {
        return StrategyAdvice::new("Safe Drive", Some("Focus on fairway hit".to_string()));
    }
    StrategyAdvice::new("Approach", Some(format!("Leaves {} to pin", dist_label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> Vec<ClubProfile> {
        vec![
            ClubProfile::new("Driver", 230.0, 45.0, 25.0),
            ClubProfile::new("7 Iron", 150.0, 18.0, 12.0),
            ClubProfile::new("Putter", 30.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_band_priority_order() {
        assert_eq!(strategy_recommendation(3.0, &bag(), 3).headline, "Tap-In Range");
        assert_eq!(strategy_recommendation(15.0, &bag(), 3).headline, "Short Game");
        assert_eq!(strategy_recommendation(95.0, &bag(), 2).headline, "Perfect Layup");
        assert_eq!(strategy_recommendation(95.0, &bag(), 1).headline, "Perfect Layup");
    }

    #[test]
    fn test_beyond_longest_club_mid_hole_requires_layup() {
        let advice = strategy_recommendation(260.0, &bag(), 2);
        assert_eq!(advice.headline, "Layup Required");
    }

    #[test]
    fn test_long_first_shot_is_a_safe_drive() {
        let advice = strategy_recommendation(260.0, &bag(), 1);
        assert_eq!(advice.headline, "Safe Drive");
    }

    #[test]
    fn test_default_band_is_approach_with_remaining_distance() {
        let advice = strategy_recommendation(150.0, &bag(), 2);
        assert_eq!(advice.headline, "Approach");
        assert_eq!(advice.detail.as_deref(), Some("Leaves 150m to pin"));
    }
}
