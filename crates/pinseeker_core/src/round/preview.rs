//! Pull-based shot preview.
//!
//! The presentation layer asks for a preview whenever it wants one (club
//! change, aim drag, wind edit) instead of recomputing on a render cycle.
//! Everything returned is derived display data; confirming the shot goes
//! through [`GameState::record_shot`] with the `planned` payload.

use crate::error::{EngineError, Result};
use crate::geodesy;
use crate::models::club::ClubProfile;
use crate::models::geo::GeoPoint;
use crate::models::round::PlannedShot;
use crate::round::state::GameState;
use crate::strategy::{self, LayupPlan, StrategyAdvice};

/// Wind over the shot, in m/s and the compass direction it blows toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindConditions {
    pub speed: f64,
    pub direction: f64,
}

/// Everything the aim screen renders for one candidate shot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotPreview {
    pub landing: GeoPoint,
    /// "Plays like" carry after wind.
    pub effective_distance: f64,
    /// The planned target + dispersion to store if the player confirms.
    pub planned: PlannedShot,
    /// Closed dispersion ellipse outline around the landing point.
    pub ellipse_points: Vec<GeoPoint>,
    /// Meters from the predicted landing to the green center.
    pub leaves_distance: f64,
    pub strategy: StrategyAdvice,
}

impl<'a> GameState<'a> {
    /// Computes the full preview for aiming `club` along `target_bearing`.
    pub fn compute_shot_preview(
        &self,
        club: &ClubProfile,
        target_bearing: f64,
        wind: Option<WindConditions>,
    ) -> Result<ShotPreview> {
        if !self.is_round_active() {
            return Err(EngineError::InvalidState(
                "shot preview requires an active round".to_string(),
            ));
        }
        let ball = self.current_ball_position();
        let green_center = self.current_hole()?.green_center();

        let (landing, effective_distance) = match wind {
            Some(w) => {
                let adjusted = geodesy::wind_adjusted_shot(
                    ball,
                    club.carry_distance,
                    target_bearing,
                    w.speed,
                    w.direction,
                );
                (adjusted.destination, adjusted.effective_distance)
            }
            None => (
                strategy::predicted_landing(ball, club, target_bearing),
                club.carry_distance,
            ),
        };

        let planned = strategy::dispersion_ellipse_for(club, landing, target_bearing);
        let ellipse_points = geodesy::ellipse_points_default(
            landing,
            planned.dispersion.lateral,
            planned.dispersion.depth,
            planned.dispersion.rotation,
        );

        Ok(ShotPreview {
            landing,
            effective_distance,
            planned,
            ellipse_points,
            leaves_distance: geodesy::distance(landing, green_center),
            strategy: strategy::strategy_recommendation(
                geodesy::distance(ball, green_center),
                self.bag(),
                self.current_shot_number(),
            ),
        })
    }

    /// Default aim: the bearing from the ball to the green center.
    pub fn default_target_bearing(&self) -> Result<f64> {
        let green_center = self.current_hole()?.green_center();
        Ok(geodesy::bearing(self.current_ball_position(), green_center))
    }

    /// The safest two-club route to the green from the current lie.
    ///
    /// An empty search is an error (`NoFeasibleStrategy`) so callers surface
    /// the warning instead of silently showing nothing.
    pub fn plan_layup(&self) -> Result<LayupPlan> {
        if !self.is_round_active() {
            return Err(EngineError::InvalidState(
                "layup planning requires an active round".to_string(),
            ));
        }
        let green_center = self.current_hole()?.green_center();
        let distance_to_green = geodesy::distance(self.current_ball_position(), green_center);

        strategy::layup_strategy(distance_to_green, self.bag(), self.current_shot_number())
            .ok_or(EngineError::NoFeasibleStrategy)
    }
}
