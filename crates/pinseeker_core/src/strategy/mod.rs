//! Dispersion modeling, club-pairing strategy, and bag generation.

pub mod bag;
pub mod dispersion;
pub mod layup;
pub mod measure;
pub mod recommendation;

pub use bag::{default_bag, generate_bag_from_handicap};
pub use dispersion::{dispersion_ellipse_for, predicted_landing, ELLIPSE_SIGMA_MULTIPLIER};
pub use layup::{layup_strategy, LayupPlan, LAYUP_REACH_TOLERANCE_M};
pub use measure::{measure_legs, MeasureLegs};
pub use recommendation::{strategy_recommendation, StrategyAdvice};
