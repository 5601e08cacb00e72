//! Two-shot layup search.
//!
//! Enumerates club pairs whose combined carry reaches the green and keeps
//! the pair with the least combined lateral scatter. The putter never
//! qualifies for either slot; the driver never qualifies as the second shot,
//! and not as the first once the ball has left the tee.

use crate::models::club::ClubProfile;

/// How far short of the target a pair may fall and still count (meters).
pub const LAYUP_REACH_TOLERANCE_M: f64 = 5.0;

/// A recommended club pairing for reaching the green in two.
#[derive(Debug, Clone, PartialEq)]
pub struct LayupPlan {
    pub first_club: ClubProfile,
    pub second_club: ClubProfile,
    pub combined_lateral_error: f64,
}

/// Finds the safest two-club combination covering `distance_to_green`.
///
/// Returns `None` when no admissible pair reaches the target — the caller
/// shows a warning and lets the player choose manually.
pub fn layup_strategy(
    distance_to_green: f64,
    bag: &[ClubProfile],
    shot_number: u32,
) -> Option<LayupPlan> {
    let mut best: Option<LayupPlan> = None;

    for first in bag {
        if first.is_putter() || (shot_number > 1 && first.is_driver()) {
            continue;
        }
        for second in bag {
            if second.is_putter() || second.is_driver() {
                continue;
            }
            let combined_carry = first.carry_distance + second.carry_distance;
            if combined_carry < distance_to_green - LAYUP_REACH_TOLERANCE_M {
                continue;
            }
            let combined_lateral_error =
                first.lateral_error_std_dev + second.lateral_error_std_dev;
            let beats_best = best
                .as_ref()
                .map(|b| combined_lateral_error < b.combined_lateral_error)
                .unwrap_or(true);
            if beats_best {
                best = Some(LayupPlan {
                    first_club: first.clone(),
                    second_club: second.clone(),
                    combined_lateral_error,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(name: &str, carry: f64, lateral: f64) -> ClubProfile {
        ClubProfile::new(name, carry, lateral, lateral / 2.0)
    }

    #[test]
    fn test_longest_reaching_pair_with_least_error_wins() {
        let bag = vec![
            club("5 Iron", 100.0, 20.0),
            club("9 Iron", 60.0, 10.0),
            club("Putter", 30.0, 1.0),
        ];
        let plan = layup_strategy(150.0, &bag, 2).expect("100 + 60 reaches 145");
        assert_eq!(plan.first_club.name, "5 Iron");
        assert_eq!(plan.second_club.name, "9 Iron");
        assert!((plan.combined_lateral_error - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_putter_never_qualifies_despite_tiny_error() {
        // Putter + 5 Iron would reach with the least scatter; both slots
        // must refuse it.
        let bag = vec![club("5 Iron", 120.0, 20.0), club("Putter", 40.0, 1.0)];
        assert!(layup_strategy(150.0, &bag, 2).is_none());
    }

    #[test]
    fn test_driver_allowed_first_only_from_the_tee() {
        let bag = vec![club("Driver", 230.0, 45.0), club("PW", 115.0, 10.0)];
        let from_tee = layup_strategy(340.0, &bag, 1).expect("driver + wedge reaches");
        assert_eq!(from_tee.first_club.name, "Driver");

        assert!(
            layup_strategy(340.0, &bag, 2).is_none(),
            "driver is off the table after the tee shot"
        );
    }

    #[test]
    fn test_none_when_nothing_reaches() {
        let bag = vec![club("PW", 115.0, 10.0), club("SW", 95.0, 8.0)];
        assert!(layup_strategy(300.0, &bag, 2).is_none());
    }

    #[test]
    fn test_reach_tolerance_is_five_meters() {
        let bag = vec![club("A", 80.0, 10.0), club("B", 65.0, 10.0)];
        // Combined 145 covers 150 - 5 exactly.
        assert!(layup_strategy(150.0, &bag, 2).is_some());
        assert!(layup_strategy(150.1, &bag, 2).is_none());
    }
}
