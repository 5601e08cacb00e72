//! Round ledger records.
//!
//! These structs are the SINK of the engine's data flow: confirmed shots and
//! typed hole scores accumulate here during play, and a finished round is
//! frozen into a `RoundHistory` — the sole unit the external persistence and
//! sync collaborators consume. Everything is plain numeric/string/array data
//! and must round-trip losslessly through serde_json.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::geo::GeoPoint;

/// Dispersion ellipse parameters: full lateral axis, full depth axis
/// (both meters) and rotation in degrees (aligned to the shot bearing).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DispersionParams {
    pub lateral: f64,
    pub depth: f64,
    pub rotation: f64,
}

/// What the player aimed at before committing the shot, kept for replay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlannedShot {
    pub target: GeoPoint,
    pub dispersion: DispersionParams,
}

/// One confirmed shot. Immutable once recorded: corrections create a new
/// record or remove this one by identity, never mutate in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShotRecord {
    pub hole_number: u32,
    /// 1-based, monotonically increasing within a hole. Used as a ledger key,
    /// not a dense index: deleting a shot does not renumber later ones.
    pub shot_number: u32,
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub club_used: String,
    /// Great-circle meters from `from` to `to`.
    pub distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_info: Option<PlannedShot>,
}

/// The typed score for one completed hole.
///
/// Independent of the tracked shot count: GPS tracking is advisory, the typed
/// score is authoritative. Invariant: `strokes_taken + putts + penalties >= 1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoleScore {
    pub hole_number: u32,
    pub par: u32,
    pub strokes_taken: u32,
    pub putts: u32,
    pub penalties: u32,
}

impl HoleScore {
    /// Total strokes for the hole, penalties included.
    pub fn total(&self) -> u32 {
        self.strokes_taken + self.putts + self.penalties
    }

    /// Signed score relative to par.
    pub fn to_par(&self) -> i32 {
        self.total() as i32 - self.par as i32
    }
}

/// The terminal, persistable artifact of one round.
///
/// Append-only while the round is live; frozen once finalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub id: String,
    pub date: DateTime<Utc>,
    pub course_name: String,
    pub scorecard: Vec<HoleScore>,
    pub shots: Vec<ShotRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<String>,
}

impl RoundHistory {
    pub fn total_strokes(&self) -> u32 {
        self.scorecard.iter().map(HoleScore::total).sum()
    }

    pub fn total_to_par(&self) -> i32 {
        self.scorecard.iter().map(HoleScore::to_par).sum()
    }

    /// Holes completed so far ("thru" in leaderboard display).
    pub fn thru(&self) -> u32 {
        self.scorecard.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_score_totals() {
        let score = HoleScore {
            hole_number: 1,
            par: 4,
            strokes_taken: 3,
            putts: 2,
            penalties: 1,
        };
        assert_eq!(score.total(), 6);
        assert_eq!(score.to_par(), 2);
    }

    #[test]
    fn test_round_history_aggregates() {
        let history = RoundHistory {
            id: "r1".to_string(),
            date: Utc::now(),
            course_name: "Test".to_string(),
            scorecard: vec![
                HoleScore { hole_number: 1, par: 4, strokes_taken: 2, putts: 1, penalties: 0 },
                HoleScore { hole_number: 2, par: 3, strokes_taken: 3, putts: 2, penalties: 0 },
            ],
            shots: Vec::new(),
            player: None,
            tournament_id: None,
        };
        assert_eq!(history.total_strokes(), 8);
        assert_eq!(history.total_to_par(), 1);
        assert_eq!(history.thru(), 2);
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let shot = ShotRecord {
            hole_number: 1,
            shot_number: 1,
            from: GeoPoint::new(0.0, 0.0),
            to: GeoPoint::new(0.0, 0.001),
            club_used: "7 Iron".to_string(),
            distance: 111.0,
            planned_info: None,
        };
        let json = serde_json::to_string(&shot).unwrap();
        assert!(!json.contains("planned_info"));
    }
}
