pub mod club;
pub mod course;
pub mod geo;
pub mod leaderboard;
pub mod round;

pub use club::ClubProfile;
pub use course::{Course, GreenGeometry, Hole, TeeBox};
pub use geo::GeoPoint;
pub use leaderboard::{build_leaderboard, LeaderboardRow, LiveScoreEntry};
pub use round::{DispersionParams, HoleScore, PlannedShot, RoundHistory, ShotRecord};
