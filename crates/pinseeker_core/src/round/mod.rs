//! The round/shot state machine: live play, shot preview, and replay.

pub mod preview;
pub mod replay;
pub mod state;

pub use preview::{ShotPreview, WindConditions};
pub use replay::RoundReplay;
pub use state::{GameState, RoundPhase};
