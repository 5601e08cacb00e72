//! Read-only replay over a finished round.
//!
//! Wraps a borrowed [`RoundHistory`] and derives display geometry from the
//! recorded ledger: per-hole shot sequences, flight arcs, planned-dispersion
//! ellipses. Nothing here mutates the history and nothing computed here
//! feeds back into any ledger.

use crate::geodesy;
use crate::models::geo::GeoPoint;
use crate::models::round::{HoleScore, RoundHistory, ShotRecord};

/// A replayable view of one recorded round.
#[derive(Debug, Clone, Copy)]
pub struct RoundReplay<'a> {
    history: &'a RoundHistory,
}

impl<'a> RoundReplay<'a> {
    pub fn new(history: &'a RoundHistory) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &RoundHistory {
        self.history
    }

    /// Hole numbers present on the scorecard, in recorded order.
    pub fn scored_holes(&self) -> Vec<u32> {
        self.history.scorecard.iter().map(|s| s.hole_number).collect()
    }

    pub fn score_for_hole(&self, hole_number: u32) -> Option<&HoleScore> {
        self.history.scorecard.iter().find(|s| s.hole_number == hole_number)
    }

    /// Shots played on one hole, in ledger order.
    pub fn shots_for_hole(&self, hole_number: u32) -> Vec<&ShotRecord> {
        self.history.shots.iter().filter(|s| s.hole_number == hole_number).collect()
    }

    /// The points to fit the replay viewport around: every shot origin on
    /// the hole plus the final landing.
    pub fn hole_path_points(&self, hole_number: u32) -> Vec<GeoPoint> {
        let shots = self.shots_for_hole(hole_number);
        let mut points: Vec<GeoPoint> = shots.iter().map(|s| s.from).collect();
        if let Some(last) = shots.last() {
            points.push(last.to);
        }
        points
    }

    /// The arced flight path of one recorded shot.
    pub fn flight_arc(&self, shot: &ShotRecord) -> Vec<GeoPoint> {
        geodesy::arc_points_default(shot.from, shot.to)
    }

    /// The dispersion ellipse the player saw when planning this shot, if a
    /// plan was stored.
    pub fn planned_ellipse(&self, shot: &ShotRecord) -> Option<Vec<GeoPoint>> {
        shot.planned_info.map(|plan| {
            geodesy::ellipse_points_default(
                plan.target,
                plan.dispersion.lateral,
                plan.dispersion.depth,
                plan.dispersion.rotation,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::round::{DispersionParams, PlannedShot};
    use chrono::Utc;

    fn shot(hole: u32, number: u32, with_plan: bool) -> ShotRecord {
        let from = GeoPoint::new(0.001 * number as f64, 0.0);
        let to = GeoPoint::new(0.001 * (number + 1) as f64, 0.0);
        ShotRecord {
            hole_number: hole,
            shot_number: number,
            from,
            to,
            club_used: "7 Iron".to_string(),
            distance: geodesy::distance(from, to),
            planned_info: with_plan.then_some(PlannedShot {
                target: to,
                dispersion: DispersionParams { lateral: 30.0, depth: 40.0, rotation: 0.0 },
            }),
        }
    }

    fn history() -> RoundHistory {
        RoundHistory {
            id: "r1".to_string(),
            date: Utc::now(),
            course_name: "Replay Links".to_string(),
            scorecard: vec![
                HoleScore { hole_number: 1, par: 4, strokes_taken: 3, putts: 2, penalties: 0 },
                HoleScore { hole_number: 2, par: 3, strokes_taken: 2, putts: 1, penalties: 0 },
            ],
            shots: vec![shot(1, 1, true), shot(1, 2, false), shot(2, 1, false)],
            player: Some("alice".to_string()),
            tournament_id: None,
        }
    }

    #[test]
    fn test_shots_filter_by_hole() {
        let history = history();
        let replay = RoundReplay::new(&history);
        assert_eq!(replay.shots_for_hole(1).len(), 2);
        assert_eq!(replay.shots_for_hole(2).len(), 1);
        assert!(replay.shots_for_hole(3).is_empty());
        assert_eq!(replay.scored_holes(), vec![1, 2]);
    }

    #[test]
    fn test_hole_path_covers_origins_and_final_landing() {
        let history = history();
        let replay = RoundReplay::new(&history);
        let path = replay.hole_path_points(1);
        assert_eq!(path.len(), 3, "two origins plus the final landing");
        assert_eq!(path[0], GeoPoint::new(0.001, 0.0));
        assert_eq!(path[2], GeoPoint::new(0.003, 0.0));
    }

    #[test]
    fn test_planned_ellipse_only_when_plan_was_stored() {
        let history = history();
        let replay = RoundReplay::new(&history);
        let shots = replay.shots_for_hole(1);
        assert!(replay.planned_ellipse(shots[0]).is_some());
        assert!(replay.planned_ellipse(shots[1]).is_none());
    }

    #[test]
    fn test_replay_never_mutates_the_history() {
        let history = history();
        let before = history.clone();
        {
            let replay = RoundReplay::new(&history);
            let shots = replay.shots_for_hole(1);
            let _ = replay.flight_arc(shots[0]);
            let _ = replay.planned_ellipse(shots[0]);
            let _ = replay.hole_path_points(2);
        }
        assert_eq!(history, before);
    }
}
