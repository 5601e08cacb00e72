//! Live round state.
//!
//! `GameState` owns the shot and score ledgers for exactly one round. It is
//! mutated only by discrete user-confirmed events, one at a time; background
//! position updates land in the separate observed-position slot and never
//! mutate the ledgers. Finishing converts the state into an immutable
//! [`RoundHistory`]; abandoning discards it.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::geodesy;
use crate::models::club::ClubProfile;
use crate::models::course::{Course, Hole};
use crate::models::geo::GeoPoint;
use crate::models::round::{HoleScore, PlannedShot, RoundHistory, ShotRecord};

/// Round lifecycle. `Finished` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    InProgress,
    Finished,
    Abandoned,
}

/// Transient per-round state machine.
///
/// Borrows the course and the active bag read-only for the lifetime of the
/// round; exclusively owns `scorecard` and `shots` until finalization.
#[derive(Debug)]
pub struct GameState<'a> {
    course: &'a Course,
    /// The active bag for the round, read-only.
    bag: &'a [ClubProfile],
    phase: RoundPhase,
    current_hole_index: usize,
    current_shot_number: u32,
    current_ball_position: GeoPoint,
    /// Live-location feed. Read for display, never a ledger input.
    observed_position: Option<GeoPoint>,
    scorecard: Vec<HoleScore>,
    shots: Vec<ShotRecord>,
    pub player: Option<String>,
    pub tournament_id: Option<String>,
}

impl<'a> GameState<'a> {
    pub fn new(course: &'a Course, bag: &'a [ClubProfile]) -> Self {
        Self {
            course,
            bag,
            phase: RoundPhase::NotStarted,
            current_hole_index: 0,
            current_shot_number: 1,
            current_ball_position: GeoPoint::default(),
            observed_position: None,
            scorecard: Vec::new(),
            shots: Vec::new(),
            player: None,
            tournament_id: None,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_round_active(&self) -> bool {
        self.phase == RoundPhase::InProgress
    }

    pub fn course(&self) -> &Course {
        self.course
    }

    pub fn bag(&self) -> &[ClubProfile] {
        self.bag
    }

    pub fn current_hole_index(&self) -> usize {
        self.current_hole_index
    }

    pub fn current_shot_number(&self) -> u32 {
        self.current_shot_number
    }

    pub fn current_ball_position(&self) -> GeoPoint {
        self.current_ball_position
    }

    pub fn observed_position(&self) -> Option<GeoPoint> {
        self.observed_position
    }

    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    pub fn scorecard(&self) -> &[HoleScore] {
        &self.scorecard
    }

    /// The hole currently being played.
    pub fn current_hole(&self) -> Result<&Hole> {
        self.course.hole(self.current_hole_index).ok_or_else(|| {
            EngineError::OutOfRange(format!(
                "hole index {} outside course '{}'",
                self.current_hole_index, self.course.name
            ))
        })
    }

    fn require_in_progress(&self, operation: &str) -> Result<()> {
        if self.phase != RoundPhase::InProgress {
            return Err(EngineError::InvalidState(format!(
                "{} requires an active round (phase {:?})",
                operation, self.phase
            )));
        }
        Ok(())
    }

    fn tee_position(&self, hole_index: usize) -> Result<GeoPoint> {
        let hole = self.course.hole(hole_index).ok_or_else(|| {
            EngineError::OutOfRange(format!(
                "hole index {} outside course '{}'",
                hole_index, self.course.name
            ))
        })?;
        let tee = hole.active_tee().ok_or_else(|| {
            EngineError::OutOfRange(format!("hole {} has no tee box", hole.number))
        })?;
        Ok(tee.location)
    }

    // ========================
    // Lifecycle events
    // ========================

    /// Begins play from `starting_hole_index` (0-based).
    pub fn start_round(&mut self, starting_hole_index: usize) -> Result<()> {
        if self.phase != RoundPhase::NotStarted {
            return Err(EngineError::InvalidState(format!(
                "round already {:?}",
                self.phase
            )));
        }
        let tee = self.tee_position(starting_hole_index)?;

        self.current_hole_index = starting_hole_index;
        self.current_shot_number = 1;
        self.current_ball_position = tee;
        self.scorecard.clear();
        self.shots.clear();
        self.phase = RoundPhase::InProgress;

        log::info!(
            "round started on '{}' hole {}",
            self.course.name,
            starting_hole_index + 1
        );
        Ok(())
    }

    /// Appends a confirmed shot and advances the ball.
    ///
    /// Air-shots and penalties are player-declared, not engine-enforced;
    /// there is no upper bound on shots per hole.
    pub fn record_shot(
        &mut self,
        landing: GeoPoint,
        club_used: &str,
        planned_info: Option<PlannedShot>,
    ) -> Result<&ShotRecord> {
        self.require_in_progress("record_shot")?;
        let hole_number = self.current_hole()?.number;

        let record = ShotRecord {
            hole_number,
            shot_number: self.current_shot_number,
            from: self.current_ball_position,
            to: landing,
            club_used: club_used.to_string(),
            distance: geodesy::distance(self.current_ball_position, landing),
            planned_info,
        };
        log::debug!(
            "hole {} shot {}: {} for {:.0}m",
            hole_number,
            record.shot_number,
            club_used,
            record.distance
        );

        self.current_ball_position = landing;
        self.current_shot_number += 1;
        self.shots.push(record);
        Ok(self.shots.last().expect("shot just appended"))
    }

    /// Removes one shot by `(hole, shot)` identity.
    ///
    /// Later shots keep their numbers: shot number is a ledger key within
    /// the hole, not a dense index.
    pub fn delete_shot(&mut self, hole_number: u32, shot_number: u32) -> Result<ShotRecord> {
        self.require_in_progress("delete_shot")?;
        let idx = self
            .shots
            .iter()
            .position(|s| s.hole_number == hole_number && s.shot_number == shot_number)
            .ok_or_else(|| {
                EngineError::OutOfRange(format!(
                    "no shot {} recorded on hole {}",
                    shot_number, hole_number
                ))
            })?;
        Ok(self.shots.remove(idx))
    }

    /// Upserts the typed score for the current hole.
    ///
    /// The typed score is authoritative; it may disagree with the tracked
    /// shot count. An all-zero score is rejected.
    pub fn record_hole_score(
        &mut self,
        strokes_taken: u32,
        putts: u32,
        penalties: u32,
    ) -> Result<&HoleScore> {
        self.require_in_progress("record_hole_score")?;
        if strokes_taken + putts + penalties == 0 {
            return Err(EngineError::OutOfRange(
                "hole score must total at least one stroke".to_string(),
            ));
        }
        let hole = self.current_hole()?;
        let score = HoleScore {
            hole_number: hole.number,
            par: hole.effective_par(),
            strokes_taken,
            putts,
            penalties,
        };

        let idx = match self.scorecard.iter().position(|s| s.hole_number == score.hole_number) {
            Some(existing) => {
                self.scorecard[existing] = score;
                existing
            }
            None => {
                self.scorecard.push(score);
                self.scorecard.len() - 1
            }
        };
        Ok(&self.scorecard[idx])
    }

    /// Moves play to the next hole and resets the ball to its tee.
    ///
    /// Past the last hole this fails with `OutOfRange`; the caller treats
    /// that as "round complete".
    pub fn advance_hole(&mut self) -> Result<&Hole> {
        self.require_in_progress("advance_hole")?;
        let next_index = self.current_hole_index + 1;
        if next_index >= self.course.holes.len() {
            return Err(EngineError::OutOfRange(format!(
                "no hole after {} on '{}'",
                self.current_hole_index + 1,
                self.course.name
            )));
        }
        let tee = self.tee_position(next_index)?;

        self.current_hole_index = next_index;
        self.current_shot_number = 1;
        self.current_ball_position = tee;
        log::info!("advanced to hole {}", next_index + 1);
        self.current_hole()
    }

    /// Freezes the round into an immutable history.
    ///
    /// Requires at least one scored hole. Ownership of the ledgers transfers
    /// to the returned `RoundHistory`; the state machine is terminal after.
    pub fn finish_round(&mut self) -> Result<RoundHistory> {
        self.require_in_progress("finish_round")?;
        if self.scorecard.is_empty() {
            return Err(EngineError::InvalidState(
                "cannot finish a round with no scored holes".to_string(),
            ));
        }

        self.phase = RoundPhase::Finished;
        let history = RoundHistory {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            course_name: self.course.name.clone(),
            scorecard: std::mem::take(&mut self.scorecard),
            shots: std::mem::take(&mut self.shots),
            player: self.player.clone(),
            tournament_id: self.tournament_id.clone(),
        };
        log::info!(
            "round finished: {} holes, {} tracked shots",
            history.scorecard.len(),
            history.shots.len()
        );
        Ok(history)
    }

    /// Discards the round without producing a history.
    pub fn abandon(&mut self) -> Result<()> {
        self.require_in_progress("abandon")?;
        self.phase = RoundPhase::Abandoned;
        self.scorecard.clear();
        self.shots.clear();
        log::info!("round abandoned");
        Ok(())
    }

    // ========================
    // Live location
    // ========================

    /// Accepts a background position fix.
    ///
    /// Deliberately decoupled from the ledger: racing location updates can
    /// never corrupt shot records. Accepted in any phase.
    pub fn update_observed_position(&mut self, position: GeoPoint) {
        self.observed_position = Some(position);
    }

    /// Drops the ball on a manually chosen point (long-press correction).
    pub fn override_ball_position(&mut self, position: GeoPoint) -> Result<()> {
        self.require_in_progress("override_ball_position")?;
        self.current_ball_position = position;
        Ok(())
    }
}
