//! # pinseeker_core - Geodesic Shot-Tracking and Strategy Engine
//!
//! The computational core of an on-course golf companion: spherical-earth
//! coordinate math, dispersion modeling, club-pairing strategy, and the
//! per-hole shot/round state machine that turns a sequence of GPS taps into
//! a structured, replayable round.
//!
//! ## Boundaries
//! - Consumes a read-only [`Course`](models::Course) and club bag.
//! - Produces an immutable [`RoundHistory`](models::RoundHistory), the sole
//!   unit the external persistence/sync collaborators handle.
//! - Map rendering, gesture capture, auth, and cloud storage live outside
//!   this crate; everything here is pure, synchronous computation.

pub mod api;
pub mod data;
pub mod error;
pub mod geodesy;
pub mod models;
pub mod round;
pub mod strategy;
pub mod units;

pub use api::{round_history_from_json, round_history_to_json};
pub use error::{EngineError, Result};
pub use models::{
    build_leaderboard, ClubProfile, Course, DispersionParams, GeoPoint, GreenGeometry, Hole,
    HoleScore, LeaderboardRow, LiveScoreEntry, PlannedShot, RoundHistory, ShotRecord, TeeBox,
};
pub use round::{GameState, RoundPhase, RoundReplay, ShotPreview, WindConditions};
pub use strategy::{
    default_bag, generate_bag_from_handicap, layup_strategy, strategy_recommendation, LayupPlan,
    StrategyAdvice,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
