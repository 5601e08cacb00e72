//! Live-leaderboard feed shapes.
//!
//! During tournament play each completed hole is published as one
//! `LiveScoreEntry`, keyed by `(tournament_id, player, hole_number)`. The
//! leaderboard collaborator consumes these incrementally; `build_leaderboard`
//! is the aggregation it displays.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::round::HoleScore;

/// One hole's score for one player in one tournament.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveScoreEntry {
    pub tournament_id: String,
    pub player: String,
    pub hole_number: u32,
    pub par: u32,
    pub strokes_taken: u32,
    pub putts: u32,
    pub penalties: u32,
}

impl LiveScoreEntry {
    pub fn from_score(tournament_id: &str, player: &str, score: &HoleScore) -> Self {
        Self {
            tournament_id: tournament_id.to_string(),
            player: player.to_string(),
            hole_number: score.hole_number,
            par: score.par,
            strokes_taken: score.strokes_taken,
            putts: score.putts,
            penalties: score.penalties,
        }
    }

    pub fn total(&self) -> u32 {
        self.strokes_taken + self.putts + self.penalties
    }
}

/// One row of the aggregated tournament leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardRow {
    pub player: String,
    pub total_strokes: u32,
    pub to_par: i32,
    /// Holes completed so far.
    pub thru: u32,
}

/// Aggregates the live feed for one tournament into sorted leaderboard rows.
///
/// Entries for other tournaments are ignored. A resubmitted
/// `(player, hole_number)` key replaces the earlier entry (last write wins —
/// score corrections arrive as re-publishes). Rows sort by score to par,
/// ties broken by player name.
pub fn build_leaderboard(entries: &[LiveScoreEntry], tournament_id: &str) -> Vec<LeaderboardRow> {
    let mut latest: HashMap<(&str, u32), &LiveScoreEntry> = HashMap::new();
    for entry in entries.iter().filter(|e| e.tournament_id == tournament_id) {
        latest.insert((entry.player.as_str(), entry.hole_number), entry);
    }

    let mut per_player: HashMap<&str, (u32, i32, u32)> = HashMap::new();
    for entry in latest.values() {
        let row = per_player.entry(entry.player.as_str()).or_insert((0, 0, 0));
        row.0 += entry.total();
        row.1 += entry.total() as i32 - entry.par as i32;
        row.2 += 1;
    }

    let mut rows: Vec<LeaderboardRow> = per_player
        .into_iter()
        .map(|(player, (total_strokes, to_par, thru))| LeaderboardRow {
            player: player.to_string(),
            total_strokes,
            to_par,
            thru,
        })
        .collect();
    rows.sort_by(|a, b| a.to_par.cmp(&b.to_par).then_with(|| a.player.cmp(&b.player)));
    rows
}
